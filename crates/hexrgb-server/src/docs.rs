//! OpenAPI document and the interactive docs page served at `/docs`.

use serde_json::{json, Value};

/// Path the docs page loads the schema from.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// OpenAPI 3 description of every route the server exposes.
pub fn openapi() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Hex to RGB Converter",
            "description": "Convert hexadecimal color codes to RGB components.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Service information",
                    "responses": { "200": { "description": "Service banner" } },
                }
            },
            "/convert": {
                "post": {
                    "summary": "Convert a hex color code to RGB",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/HexColorRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Converted color",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/RgbResponse" }
                                }
                            }
                        },
                        "413": { "description": "Request body too large" },
                        "422": {
                            "description": "Validation Error",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HTTPValidationError" }
                                }
                            }
                        }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Liveness check",
                    "responses": { "200": { "description": "Server is up" } },
                }
            }
        },
        "components": {
            "schemas": {
                "HexColorRequest": {
                    "type": "object",
                    "required": ["hex_code"],
                    "properties": {
                        "hex_code": {
                            "type": "string",
                            "pattern": "^#?[0-9A-Fa-f]{6}$",
                            "examples": ["#FF5733"],
                        }
                    }
                },
                "RgbResponse": {
                    "type": "object",
                    "required": ["hex_code", "red", "green", "blue", "rgb"],
                    "properties": {
                        "hex_code": { "type": "string" },
                        "red": { "type": "integer", "minimum": 0, "maximum": 255 },
                        "green": { "type": "integer", "minimum": 0, "maximum": 255 },
                        "blue": { "type": "integer", "minimum": 0, "maximum": 255 },
                        "rgb": { "type": "string", "examples": ["rgb(255, 87, 51)"] },
                    }
                },
                "ValidationError": {
                    "type": "object",
                    "required": ["loc", "msg", "type"],
                    "properties": {
                        "loc": { "type": "array", "items": { "type": "string" } },
                        "msg": { "type": "string" },
                        "type": { "type": "string" },
                    }
                },
                "HTTPValidationError": {
                    "type": "object",
                    "properties": {
                        "detail": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/ValidationError" },
                        }
                    }
                }
            }
        }
    })
}

/// Swagger UI shell pointed at [`OPENAPI_PATH`].
pub const DOCS_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Hex to RGB Converter - Swagger UI</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui", deepLinking: true });
</script>
</body>
</html>
"##;
