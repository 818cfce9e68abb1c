//! `<Entity>Handler`: create, update and delete against the base repository.

use crudgen_schema::FieldSpec;

use super::namespace_file;
use crate::{CodeBuilder, SliceContext};

/// Copy one field from the incoming command onto the tracked entity.
///
/// Timestamps go through `EnsureUtc()`; nullable ones keep their null.
fn assignment(field: &FieldSpec) -> String {
    let name = &field.name;
    if !field.is_date_time() {
        format!("entity.{name} = request.{name};")
    } else if field.ty.trim_end().ends_with('?') {
        format!("entity.{name} = request.{name}?.EnsureUtc();")
    } else {
        format!("entity.{name} = request.{name}.EnsureUtc();")
    }
}

fn assignments(builder: CodeBuilder, fields: &[FieldSpec]) -> CodeBuilder {
    builder.each(fields, |b, field| b.line(&assignment(field)))
}

pub fn render(ctx: &SliceContext<'_>) -> String {
    let names = ctx.names;
    let model_type = ctx.model_type();
    let fields = &ctx.model.fields;

    let usings = [
        "MediatR".to_string(),
        ctx.create_ns(),
        ctx.update_ns(),
        ctx.delete_ns(),
        ctx.core_data_ns(),
        ctx.core_models_ns(),
        "Microsoft.Extensions".to_string(),
    ];

    namespace_file(usings, &ctx.entity_ns(), |b| {
        b.line(&format!("public class {} :", names.handler))
            .indent()
            .line(&format!(
                "IRequestHandler<{}, {}>,",
                names.create_command, names.create_result
            ))
            .line(&format!("IRequestHandler<{}, bool>,", names.update_command))
            .line(&format!("IRequestHandler<{}, bool>", names.delete_command))
            .dedent()
            .braces(|b| {
                let b = b
                    .line(&format!(
                        "private readonly IBaseRepository<{model_type}> _repository;"
                    ))
                    .blank()
                    .line(&format!(
                        "public {}(IBaseRepository<{model_type}> repository)",
                        names.handler
                    ))
                    .braces(|b| b.line("_repository = repository;"))
                    .blank();

                // create
                let b = b
                    .line(&format!(
                        "public async Task<{}> Handle({} request, CancellationToken cancellationToken)",
                        names.create_result, names.create_command
                    ))
                    .braces(|b| {
                        let b = b.line(&format!("var entity = new {model_type}();"));
                        assignments(b, fields)
                            .blank()
                            .line("await _repository.AddAsync(entity, cancellationToken);")
                            .line("await _repository.UnitOfWork.CommitAsync();")
                            .line(&format!("return new {}(entity.Id);", names.create_result))
                    })
                    .blank();

                // update
                let b = b
                    .line(&format!(
                        "public async Task<bool> Handle({} request, CancellationToken cancellationToken)",
                        names.update_command
                    ))
                    .braces(|b| {
                        let b = b
                            .line("var entityList = await _repository.RepositoryConsult.SearchAsync(x => x.Id == request.Id);")
                            .line("var entity = entityList.FirstOrDefault();")
                            .line("if (entity == null) return false;");
                        assignments(b, fields)
                            .line("_repository.Update(entity);")
                            .line("return await _repository.UnitOfWork.CommitAsync();")
                    })
                    .blank();

                // delete
                b.line(&format!(
                    "public async Task<bool> Handle({} request, CancellationToken cancellationToken)",
                    names.delete_command
                ))
                .braces(|b| {
                    b.line("var entityList = await _repository.RepositoryConsult.SearchAsync(x => x.Id == request.Id);")
                        .line("var entity = entityList.FirstOrDefault();")
                        .line("if (entity == null) return false;")
                        .line("_repository.Remove(entity);")
                        .line("await _repository.UnitOfWork.CommitAsync();")
                        .line("return true;")
                })
            })
    })
}
