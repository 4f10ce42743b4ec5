pub mod page;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::json;
use shelf_db::{Catalog, FakerSeed, SeedSource};
use shelf_kernel::{module::Mount, settings::Settings, InitCtx, Module};
use shelf_shared::{Book, BookDraft};
use utoipa::PartialSchema;

/// Books module: the catalogue API and the page that renders it
pub struct BooksModule {
    state: routes::BooksState,
}

impl BooksModule {
    pub fn new(catalog: Arc<Catalog>, seed: Arc<dyn SeedSource>) -> Self {
        Self {
            state: routes::BooksState { catalog, seed },
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.state.catalog
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            seed_url = %ctx.settings.catalog.seed_url,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.state.clone())
    }

    fn mount(&self) -> Mount {
        Mount::Root
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let book_schema = serde_json::to_value(Book::schema()).ok()?;
        let draft_schema = serde_json::to_value(BookDraft::schema()).ok()?;
        let error = json!({
            "description": "Error",
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                }
            }
        });
        let book_response = |description: &str| {
            json!({
                "description": description,
                "content": {
                    "application/json": {
                        "schema": { "$ref": "#/components/schemas/Book" }
                    }
                }
            })
        };
        let draft_body = json!({
            "required": true,
            "content": {
                "application/json": {
                    "schema": { "$ref": "#/components/schemas/BookDraft" }
                }
            }
        });
        let id_param = json!([{
            "name": "id",
            "in": "query",
            "required": true,
            "schema": { "type": "integer", "format": "int64" }
        }]);

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Render the book list page",
                        "tags": ["Books"],
                        "responses": {
                            "200": { "description": "HTML page" },
                            "500": error
                        }
                    }
                },
                "/books": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Current catalogue",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            },
                            "500": error
                        }
                    }
                },
                "/add": {
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": draft_body,
                        "responses": {
                            "200": book_response("Created book with its assigned id"),
                            "400": error
                        }
                    }
                },
                "/update": {
                    "put": {
                        "summary": "Replace a book's fields",
                        "tags": ["Books"],
                        "parameters": id_param,
                        "requestBody": draft_body,
                        "responses": {
                            "200": book_response("Updated book"),
                            "400": error,
                            "404": error
                        }
                    }
                },
                "/delete": {
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "parameters": id_param,
                        "responses": {
                            "204": { "description": "Deleted" },
                            "400": error,
                            "404": error
                        }
                    }
                },
                "/reset": {
                    "post": {
                        "summary": "Restore the seeded catalogue",
                        "tags": ["Books"],
                        "responses": {
                            "204": { "description": "Reset" }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": book_schema,
                    "BookDraft": draft_schema
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let books = self.state.catalog.len().await;
        tracing::info!(module = self.name(), books, "books module stopped");
        Ok(())
    }
}

/// Create the books module backed by the configured seed feed
pub fn create_module(settings: &Settings) -> Arc<dyn Module> {
    let seed: Arc<dyn SeedSource> = Arc::new(FakerSeed::new(settings.catalog.seed_url.clone()));
    Arc::new(BooksModule::new(Arc::new(Catalog::new()), seed))
}
