//! OpenAPI description of the Receipt Processor API.
//!
//! Served at `GET /api-docs/openapi.json`.

use serde_json::{Value, json};

/// Path the OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Builds the OpenAPI 3.0.3 document for every route the router exposes.
pub fn openapi_document() -> Value {
    let amount = json!({
        "type": "string",
        "pattern": "^\\d+\\.\\d{2}$",
        "example": "6.49"
    });
    let receipt_id = json!({
        "type": "string",
        "pattern": "^\\S+$",
        "example": "adb6b560-0eef-42bc-9d16-df48f30e89b2"
    });
    let error = json!({ "$ref": "#/components/schemas/Error" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Receipt Processor",
            "description": "A simple receipt processor",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/receipts/process": {
                "post": {
                    "summary": "Submits a receipt for processing",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/Receipt" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Returns the ID assigned to the receipt",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "required": ["id"],
                                        "properties": { "id": receipt_id }
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "The receipt is invalid",
                            "content": { "application/json": { "schema": error } }
                        }
                    }
                }
            },
            "/receipts/{id}/points": {
                "get": {
                    "summary": "Returns the points awarded for the receipt",
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "description": "The ID of the receipt",
                        "schema": receipt_id
                    }],
                    "responses": {
                        "200": {
                            "description": "The number of points awarded",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "points": {
                                                "type": "integer",
                                                "format": "int64",
                                                "example": 100
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        "404": {
                            "description": "No receipt found for that ID.",
                            "content": { "application/json": { "schema": error } }
                        }
                    }
                }
            },
            "/receipts/all": {
                "get": {
                    "summary": "Returns the points and IDs for all receipts",
                    "responses": {
                        "200": {
                            "description": "An object mapping every receipt ID to its points",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "receipts": {
                                                "type": "object",
                                                "additionalProperties": {
                                                    "type": "integer",
                                                    "format": "int64"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Receipt": {
                    "type": "object",
                    "required": ["retailer", "purchaseDate", "purchaseTime", "items", "total"],
                    "properties": {
                        "retailer": {
                            "description": "The name of the retailer or store the receipt is from.",
                            "type": "string",
                            "example": "Target"
                        },
                        "purchaseDate": {
                            "description": "The date of the purchase printed on the receipt.",
                            "type": "string",
                            "format": "date",
                            "example": "2022-01-01"
                        },
                        "purchaseTime": {
                            "description": "The time of the purchase printed on the receipt. 24-hour time expected.",
                            "type": "string",
                            "format": "time",
                            "example": "13:01"
                        },
                        "items": {
                            "type": "array",
                            "minItems": 1,
                            "items": { "$ref": "#/components/schemas/Item" }
                        },
                        "total": amount
                    }
                },
                "Item": {
                    "type": "object",
                    "required": ["shortDescription", "price"],
                    "properties": {
                        "shortDescription": {
                            "description": "The Short Product Description for the item.",
                            "type": "string",
                            "example": "Mountain Dew 12PK"
                        },
                        "price": amount
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["code", "message"],
                    "properties": {
                        "code": { "type": "string" },
                        "message": { "type": "string" },
                        "details": { "type": "string" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_metadata() {
        let doc = openapi_document();
        assert_eq!(doc["openapi"], "3.0.3");
        assert_eq!(doc["info"]["title"], "Receipt Processor");
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_document_lists_every_route() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/receipts/process"));
        assert!(paths.contains_key("/receipts/{id}/points"));
        assert!(paths.contains_key("/receipts/all"));
    }

    #[test]
    fn test_receipt_schema_requires_all_fields() {
        let doc = openapi_document();
        let required = doc["components"]["schemas"]["Receipt"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 5);
        assert_eq!(
            doc["components"]["schemas"]["Item"]["properties"]["price"]["pattern"],
            "^\\d+\\.\\d{2}$"
        );
    }
}
