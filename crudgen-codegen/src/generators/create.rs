//! The create family: command, result and validation.

use super::{IDENTITY_PROPERTY, namespace_file, property_class};
use crate::SliceContext;

/// `Create<Entity>Command`: every field, no identity.
pub fn render_command(ctx: &SliceContext<'_>) -> String {
    property_class(
        &["MediatR"],
        &ctx.create_ns(),
        &format!(
            "public class {} : IRequest<{}>",
            ctx.names.create_command, ctx.names.create_result
        ),
        false,
        &ctx.model.fields,
    )
}

/// `Create<Entity>Result`: the new identity, set through the constructor.
pub fn render_result(ctx: &SliceContext<'_>) -> String {
    let result = &ctx.names.create_result;
    namespace_file(std::iter::empty::<&str>(), &ctx.create_ns(), |b| {
        b.line(&format!("public class {}", result)).braces(|b| {
            b.line(IDENTITY_PROPERTY)
                .blank()
                .line(&format!("public {}(long id)", result))
                .braces(|b| b.line("Id = id;"))
        })
    })
}

/// `Create<Entity>Validation`: placeholder rule set, non-null command only.
pub fn render_validation(ctx: &SliceContext<'_>) -> String {
    let validation = &ctx.names.create_validation;
    namespace_file(["FluentValidation"], &ctx.create_ns(), |b| {
        b.line(&format!(
            "public class {} : AbstractValidator<{}>",
            validation, ctx.names.create_command
        ))
        .braces(|b| {
            b.line(&format!("public {}()", validation))
                .braces(|b| b.line("RuleFor(x => x).NotNull();"))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn test_create_command_has_no_identity() {
        let fixture = Fixture::product();
        let content = render_command(&fixture.ctx());

        assert!(content.starts_with("using MediatR;\n\nnamespace Sabiuz.Api.Application.Product.CreateProduct\n"));
        assert!(content.contains("public class CreateProductCommand : IRequest<CreateProductResult>"));
        assert!(!content.contains(" Id "));
        assert_eq!(content.matches("{ get; set; }").count(), 3);
    }

    #[test]
    fn test_create_result() {
        let fixture = Fixture::product();
        insta::assert_snapshot!(render_result(&fixture.ctx()), @r"
        namespace Sabiuz.Api.Application.Product.CreateProduct
        {
            public class CreateProductResult
            {
                public long Id { get; set; }

                public CreateProductResult(long id)
                {
                    Id = id;
                }
            }
        }
        ");
    }

    #[test]
    fn test_create_validation() {
        let fixture = Fixture::product();
        insta::assert_snapshot!(render_validation(&fixture.ctx()), @r"
        using FluentValidation;

        namespace Sabiuz.Api.Application.Product.CreateProduct
        {
            public class CreateProductValidation : AbstractValidator<CreateProductCommand>
            {
                public CreateProductValidation()
                {
                    RuleFor(x => x).NotNull();
                }
            }
        }
        ");
    }
}
