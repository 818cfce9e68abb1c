//! `<Entity>Controller`: HTTP endpoints over the query and the mediator.

use crudgen_schema::FieldSpec;

use super::namespace_file;
use crate::{CodeBuilder, SliceContext};

/// Object initializer copying every request field onto a command.
///
/// `seed` lines come first, e.g. the route id of an update.
fn command_initializer(
    builder: CodeBuilder,
    command: &str,
    seed: &[&str],
    fields: &[FieldSpec],
) -> CodeBuilder {
    let members: Vec<String> = seed
        .iter()
        .map(|s| s.to_string())
        .chain(
            fields
                .iter()
                .map(|f| format!("{name} = request.{name}", name = f.name)),
        )
        .collect();
    let last = members.len().saturating_sub(1);

    builder
        .line(&format!("var command = new {command}"))
        .block("{", "};", |b| {
            b.each(members.iter().enumerate(), |b, (i, member)| {
                if i < last {
                    b.line(&format!("{member},"))
                } else {
                    b.line(member)
                }
            })
        })
}

/// `Send` the command and answer 200 with whatever came back.
fn send_command(builder: CodeBuilder) -> CodeBuilder {
    builder
        .line("var result = await _mediator.Send(command);")
        .line("return Ok(result);")
}

pub fn render(ctx: &SliceContext<'_>) -> String {
    let names = ctx.names;
    let fields = &ctx.model.fields;

    let usings = [
        "MediatR".to_string(),
        "Microsoft.AspNetCore.Mvc".to_string(),
        ctx.core_web_ns(),
        ctx.entity_ns(),
        ctx.dto_ns(),
        ctx.request_ns(),
        ctx.create_ns(),
        ctx.update_ns(),
        ctx.delete_ns(),
    ];

    namespace_file(usings, &ctx.controllers_ns(), |b| {
        b.line(&format!("public class {} : BaseController", names.controller))
            .braces(|b| {
                let b = b
                    .line("private readonly IMediator _mediator;")
                    .line(&format!("private readonly {} _query;", names.query_interface))
                    .blank()
                    .line(&format!(
                        "public {}(IMediator mediator, {} query)",
                        names.controller, names.query_interface
                    ))
                    .braces(|b| b.line("_mediator = mediator;").line("_query = query;"))
                    .blank();

                let b = b
                    .line("[HttpGet]")
                    .line("public async Task<IActionResult> GetAll([FromQuery] int pageNumber = 1, [FromQuery] int pageSize = 10)")
                    .braces(|b| {
                        b.line("var result = await _query.GetAllAsync(pageNumber, pageSize);")
                            .line("return Ok(result);")
                    })
                    .blank()
                    .line("[HttpGet(\"{id}\")]")
                    .line("public async Task<IActionResult> GetById(long id)")
                    .braces(|b| {
                        b.line("var result = await _query.GetByIdAsync(id);")
                            .line("if (result == null) return NotFound();")
                            .line("return Ok(result);")
                    })
                    .blank();

                let b = b
                    .line("[HttpPost]")
                    .line(&format!(
                        "public async Task<IActionResult> Create([FromBody] {} request)",
                        names.request
                    ))
                    .braces(|b| {
                        let b = command_initializer(b, &names.create_command, &[], fields);
                        send_command(b.blank())
                    })
                    .blank()
                    .line("[HttpPut(\"{id}\")]")
                    .line(&format!(
                        "public async Task<IActionResult> Update(long id, [FromBody] {} request)",
                        names.request
                    ))
                    .braces(|b| {
                        let b = command_initializer(b, &names.update_command, &["Id = id"], fields);
                        send_command(b.blank())
                    })
                    .blank();

                b.line("[HttpDelete(\"{id}\")]")
                    .line("public async Task<IActionResult> Delete(long id)")
                    .braces(|b| {
                        let b = b.line(&format!(
                            "var command = new {} {{ Id = id }};",
                            names.delete_command
                        ));
                        send_command(b)
                    })
            })
    })
}
