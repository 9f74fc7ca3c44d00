use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Market Next Door API",
        version = "0.1.0",
        description = r#"
# Market Next Door API

CRUD endpoints for a neighbourhood marketplace: customers, vendors, the items
vendors sell, and pickup preorders.

## Error Handling

- Unknown ids (including ids that are not integers) answer `404` with an empty body.
- Invalid payloads answer `400` with a map of field name to messages:

```json
{
  "email": ["Enter a valid email address."],
  "name": ["This field is required."]
}
```

- Malformed JSON and server failures use the error envelope (`ErrorResponse`).
        "#,
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Customers", description = "Customer records"),
        (name = "Vendors", description = "Vendor records"),
        (name = "Items", description = "Items across all vendors"),
        (name = "Vendor items", description = "Items scoped to one vendor"),
        (name = "Preorders", description = "Pickup preorders")
    ),
    paths(
        crate::handlers::customers::list_customers,
        crate::handlers::customers::create_customer,
        crate::handlers::customers::get_customer,
        crate::handlers::customers::update_customer,
        crate::handlers::customers::delete_customer,

        crate::handlers::vendors::list_vendors,
        crate::handlers::vendors::create_vendor,
        crate::handlers::vendors::get_vendor,
        crate::handlers::vendors::update_vendor,
        crate::handlers::vendors::delete_vendor,

        crate::handlers::items::list_items,
        crate::handlers::items::create_item,
        crate::handlers::items::get_item,
        crate::handlers::items::update_item,
        crate::handlers::items::delete_item,

        crate::handlers::vendor_items::list_vendor_items,
        crate::handlers::vendor_items::create_vendor_item,
        crate::handlers::vendor_items::get_vendor_item,
        crate::handlers::vendor_items::update_vendor_item,
        crate::handlers::vendor_items::delete_vendor_item,

        crate::handlers::preorders::list_preorders,
        crate::handlers::preorders::create_preorder,
        crate::handlers::preorders::get_preorder,
        crate::handlers::preorders::update_preorder,
        crate::handlers::preorders::delete_preorder,
    ),
    components(
        schemas(
            crate::entities::CustomerModel,
            crate::entities::VendorModel,
            crate::entities::ItemModel,
            crate::entities::PreorderModel,
            crate::dto::CustomerPayload,
            crate::dto::VendorPayload,
            crate::dto::ItemPayload,
            crate::dto::PreorderPayload,
            crate::validation::FieldErrors,
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDocV1::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_resource_path() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string_pretty(&openapi).unwrap();
        assert!(json.contains("Market Next Door API"));
        for path in [
            "/api/v1/customers",
            "/api/v1/customers/{id}",
            "/api/v1/vendors/{id}",
            "/api/v1/items/{id}",
            "/api/v1/preorders",
            "/api/v1/vendors/{vendor_id}/items/{item_id}",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
