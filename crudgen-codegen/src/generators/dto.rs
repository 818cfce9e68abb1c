//! `<Entity>Dto`: read shape returned by queries.

use super::property_class;
use crate::SliceContext;

/// Every field, with the identity prepended.
pub fn render(ctx: &SliceContext<'_>) -> String {
    property_class(
        &[],
        &ctx.dto_ns(),
        &format!("public class {}", ctx.names.dto),
        true,
        &ctx.model.fields,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn test_dto_prepends_identity() {
        let fixture = Fixture::product();
        let content = render(&fixture.ctx());

        assert_eq!(
            content,
            "namespace Sabiuz.Api.Application.Product.Dto\n\
             {\n\
             \x20   public class ProductDto\n\
             \x20   {\n\
             \x20       public long Id { get; set; }\n\
             \x20       public string Name { get; set; }\n\
             \x20       public decimal Price { get; set; }\n\
             \x20       public DateTime CreatedAt { get; set; }\n\
             \x20   }\n\
             }\n"
        );
    }

    #[test]
    fn test_dto_without_fields_keeps_identity() {
        let fixture = Fixture::empty("Marker");
        let content = render(&fixture.ctx());

        assert!(content.contains("public class MarkerDto"));
        assert_eq!(content.matches("{ get; set; }").count(), 1);
    }
}
