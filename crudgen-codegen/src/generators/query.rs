//! `IQuery<Entity>` and its `Query<Entity>` implementation, in one file.

use super::namespace_file;
use crate::SliceContext;

/// Largest page `GetAllAsync` will ever return, whatever the caller asks.
pub const MAX_PAGE_SIZE: u32 = 100;

pub fn render(ctx: &SliceContext<'_>) -> String {
    let names = ctx.names;
    let dto = &names.dto;
    let repository = format!("IRepositoryConsult<{}>", ctx.model_type());

    let usings = [
        ctx.core_data_ns(),
        ctx.dto_ns(),
        "Mapster".to_string(),
        "Microsoft.EntityFrameworkCore".to_string(),
    ];

    namespace_file(usings, &ctx.entity_ns(), |b| {
        b.line(&format!("public interface {}", names.query_interface))
            .braces(|b| {
                b.line(&format!("Task<{dto}?> GetByIdAsync(long id);"))
                    .line(&format!(
                        "Task<PaginatedList<{dto}>> GetAllAsync(int pageNumber, int pageSize);"
                    ))
            })
            .blank()
            .line(&format!(
                "public class {} : {}",
                names.query_class, names.query_interface
            ))
            .braces(|b| {
                b.line(&format!("private readonly {repository} _repository;"))
                    .blank()
                    .line(&format!("public {}({repository} repository)", names.query_class))
                    .braces(|b| b.line("_repository = repository;"))
                    .blank()
                    .line(&format!("public async Task<{dto}?> GetByIdAsync(long id)"))
                    .braces(|b| {
                        b.line("var result = await _repository.GetByIdAsync(id);")
                            .line(&format!("return result?.Adapt<{dto}>();"))
                    })
                    .blank()
                    .line(&format!(
                        "public async Task<PaginatedList<{dto}>> GetAllAsync(int pageNumber, int pageSize)"
                    ))
                    .braces(|b| {
                        b.line(&format!(
                            "if (pageSize > {MAX_PAGE_SIZE}) pageSize = {MAX_PAGE_SIZE};"
                        ))
                        .line(&format!(
                            "var query = _repository.GetQueryable().AsNoTracking().ProjectToType<{dto}>();"
                        ))
                        .line(&format!(
                            "return await PaginatedList<{dto}>.CreateAsync(query, pageNumber, pageSize);"
                        ))
                    })
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixture;

    #[test]
    fn test_query() {
        let fixture = Fixture::product();
        insta::assert_snapshot!(render(&fixture.ctx()), @r"
        using Sabiuz.Core.Data;
        using Sabiuz.Api.Application.Product.Dto;
        using Mapster;
        using Microsoft.EntityFrameworkCore;

        namespace Sabiuz.Api.Application.Product
        {
            public interface IQueryProduct
            {
                Task<ProductDto?> GetByIdAsync(long id);
                Task<PaginatedList<ProductDto>> GetAllAsync(int pageNumber, int pageSize);
            }

            public class QueryProduct : IQueryProduct
            {
                private readonly IRepositoryConsult<Sabiuz.Core.Models.Product> _repository;

                public QueryProduct(IRepositoryConsult<Sabiuz.Core.Models.Product> repository)
                {
                    _repository = repository;
                }

                public async Task<ProductDto?> GetByIdAsync(long id)
                {
                    var result = await _repository.GetByIdAsync(id);
                    return result?.Adapt<ProductDto>();
                }

                public async Task<PaginatedList<ProductDto>> GetAllAsync(int pageNumber, int pageSize)
                {
                    if (pageSize > 100) pageSize = 100;
                    var query = _repository.GetQueryable().AsNoTracking().ProjectToType<ProductDto>();
                    return await PaginatedList<ProductDto>.CreateAsync(query, pageNumber, pageSize);
                }
            }
        }
        ");
    }

    #[test]
    fn test_query_ignores_fields() {
        let product = Fixture::product();
        let empty = Fixture::empty("Product");

        assert_eq!(render(&product.ctx()), render(&empty.ctx()));
    }
}
