#[cfg(test)]
mod tests {

    mod product_validation_tests {
        use crate::models::ProductPayload;
        use crate::services::validation::{
            check_new_product, check_product_changes, validate_new_product, ValidationError,
        };
        use serde_json::json;

        fn payload(value: serde_json::Value) -> ProductPayload {
            serde_json::from_value(value).unwrap()
        }

        #[test]
        fn test_valid_new_product() {
            let p = payload(json!({
                "name": "Pen",
                "description": "Blue pen",
                "price": 1000,
                "hashtagIds": [1, 2]
            }));
            let product = check_new_product(&p).unwrap();
            assert_eq!(product.name, "Pen");
            assert_eq!(product.description, "Blue pen");
            assert_eq!(product.price.as_i64(), Some(1000));
            assert_eq!(product.hashtag_ids, vec![1, 2]);
        }

        #[test]
        fn test_empty_hashtag_list_is_supplied() {
            let p = payload(json!({
                "name": "Pen",
                "description": "Blue pen",
                "price": 1000,
                "hashtagIds": []
            }));
            assert!(check_new_product(&p).unwrap().hashtag_ids.is_empty());
        }

        #[test]
        fn test_missing_field() {
            let p = payload(json!({ "name": "Pen", "description": "Blue pen", "price": 1000 }));
            assert_eq!(check_new_product(&p), Err(ValidationError::MissingFields));
        }

        #[test]
        fn test_blank_values_count_as_missing() {
            for blank in [json!(""), json!(0), json!(null), json!(false)] {
                let p = payload(json!({
                    "name": "Pen",
                    "description": "Blue pen",
                    "price": blank,
                    "hashtagIds": [1]
                }));
                assert_eq!(
                    validate_new_product(&p),
                    vec![ValidationError::MissingFields]
                );
            }
        }

        #[test]
        fn test_name_too_long() {
            let p = payload(json!({
                "name": "A very very long name exceeding fifteen",
                "description": "x",
                "price": 10,
                "hashtagIds": []
            }));
            let err = check_new_product(&p).unwrap_err();
            assert_eq!(err, ValidationError::LengthExceeded { field: "name" });
            assert_eq!(err.to_string(), "글자수 제한을 초과했습니다.");
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            let p = payload(json!({
                "name": "가나다라마바사아자차카타파하가",
                "description": "설명",
                "price": 10,
                "hashtagIds": []
            }));
            assert!(check_new_product(&p).is_ok());
        }

        #[test]
        fn test_description_too_long() {
            let p = payload(json!({
                "name": "Pen",
                "description": "d".repeat(51),
                "price": 10,
                "hashtagIds": []
            }));
            assert_eq!(
                check_new_product(&p),
                Err(ValidationError::LengthExceeded {
                    field: "description"
                })
            );
        }

        #[test]
        fn test_price_limit_is_inclusive() {
            let at_limit = payload(json!({
                "name": "Pen", "description": "d", "price": 100000, "hashtagIds": []
            }));
            assert!(check_new_product(&at_limit).is_ok());

            let over = payload(json!({
                "name": "Pen", "description": "d", "price": 100000.5, "hashtagIds": []
            }));
            let err = check_new_product(&over).unwrap_err();
            assert_eq!(err, ValidationError::RangeExceeded { field: "price" });
            assert_eq!(err.to_string(), "가격 범위를 초과했습니다.");
        }

        #[test]
        fn test_single_mistyped_field_is_rejected() {
            let p = payload(json!({
                "name": 12345,
                "description": "Blue pen",
                "price": 1000,
                "hashtagIds": [1]
            }));
            assert_eq!(
                check_new_product(&p),
                Err(ValidationError::TypeMismatch { field: "name" })
            );

            let p = payload(json!({
                "name": "Pen",
                "description": "Blue pen",
                "price": "1000",
                "hashtagIds": [1]
            }));
            assert_eq!(
                check_new_product(&p),
                Err(ValidationError::TypeMismatch { field: "price" })
            );
        }

        #[test]
        fn test_hashtag_ids_must_be_integers() {
            let p = payload(json!({
                "name": "Pen",
                "description": "Blue pen",
                "price": 1000,
                "hashtagIds": [1, "two"]
            }));
            assert_eq!(
                check_new_product(&p),
                Err(ValidationError::TypeMismatch {
                    field: "hashtagIds"
                })
            );
        }

        #[test]
        fn test_errors_are_reported_in_rule_order() {
            let p = payload(json!({
                "name": "n".repeat(16),
                "description": "Blue pen",
                "price": 200000,
                "hashtagIds": "nope"
            }));
            let errors = validate_new_product(&p);
            assert_eq!(
                errors,
                vec![
                    ValidationError::LengthExceeded { field: "name" },
                    ValidationError::RangeExceeded { field: "price" },
                    ValidationError::TypeMismatch {
                        field: "hashtagIds"
                    },
                ]
            );
        }

        #[test]
        fn test_changes_require_a_field() {
            let p = payload(json!({}));
            let err = check_product_changes(&p).unwrap_err();
            assert_eq!(err, ValidationError::NothingToUpdate);
            assert_eq!(err.to_string(), "수정할 값을 1개라도 입력해주세요");
        }

        #[test]
        fn test_changes_price_only() {
            let p = payload(json!({ "price": 500 }));
            let changes = check_product_changes(&p).unwrap();
            assert_eq!(changes.name, None);
            assert_eq!(changes.description, None);
            assert_eq!(changes.price.and_then(|n| n.as_i64()), Some(500));
        }

        #[test]
        fn test_changes_ignore_hashtag_ids() {
            let p = payload(json!({ "hashtagIds": [1] }));
            assert_eq!(
                check_product_changes(&p),
                Err(ValidationError::NothingToUpdate)
            );
        }

        #[test]
        fn test_changes_limits() {
            let p = payload(json!({ "name": "n".repeat(16) }));
            assert_eq!(
                check_product_changes(&p),
                Err(ValidationError::LengthExceeded { field: "name" })
            );

            let p = payload(json!({ "price": 100001 }));
            assert_eq!(
                check_product_changes(&p),
                Err(ValidationError::RangeExceeded { field: "price" })
            );
        }

        #[test]
        fn test_changes_typed() {
            let p = payload(json!({ "price": "cheap" }));
            assert_eq!(
                check_product_changes(&p),
                Err(ValidationError::TypeMismatch { field: "price" })
            );
        }

        #[test]
        fn test_changes_accept_empty_string() {
            let p = payload(json!({ "description": "" }));
            let changes = check_product_changes(&p).unwrap();
            assert_eq!(changes.description.as_deref(), Some(""));
        }
    }

    mod hashtag_validation_tests {
        use crate::models::HashtagPayload;
        use crate::services::validation::{check_hashtag, validate_hashtag, ValidationError};
        use serde_json::json;

        fn payload(value: serde_json::Value) -> HashtagPayload {
            serde_json::from_value(value).unwrap()
        }

        #[test]
        fn test_valid_hashtag() {
            assert_eq!(
                check_hashtag(&payload(json!({ "hashtag_name": "office" }))),
                Ok("office".to_string())
            );
        }

        #[test]
        fn test_missing_hashtag_name() {
            let err = check_hashtag(&payload(json!({}))).unwrap_err();
            assert_eq!(err, ValidationError::MissingHashtagName);
            assert_eq!(err.to_string(), "해시태그명을 입력하세요");

            assert_eq!(
                check_hashtag(&payload(json!({ "hashtag_name": "" }))),
                Err(ValidationError::MissingHashtagName)
            );
        }

        #[test]
        fn test_hashtag_name_length() {
            assert!(check_hashtag(&payload(json!({ "hashtag_name": "h".repeat(15) }))).is_ok());
            assert_eq!(
                check_hashtag(&payload(json!({ "hashtag_name": "h".repeat(16) }))),
                Err(ValidationError::LengthExceeded {
                    field: "hashtag_name"
                })
            );
        }

        #[test]
        fn test_hashtag_name_type() {
            let errors = validate_hashtag(&payload(json!({ "hashtag_name": ["office"] })));
            assert_eq!(
                errors,
                vec![ValidationError::TypeMismatch {
                    field: "hashtag_name"
                }]
            );
        }
    }

    mod codec_tests {
        use crate::db::{decode, encode, Collection, StorageError};
        use crate::models::{Hashtag, Product, ProductHashtag};
        use serde_json::json;

        #[test]
        fn test_encode_wraps_in_envelope() {
            let hashtags = vec![Hashtag::new(1, "office")];
            let bytes = encode(Collection::Hashtags, &hashtags).unwrap();
            let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(
                value,
                json!({ "hashtags": [{ "id": 1, "hashtag_name": "office" }] })
            );
        }

        #[test]
        fn test_mapping_uses_camel_case() {
            let mappings = vec![ProductHashtag::new(3, vec![1, 2])];
            let bytes = encode(Collection::ProductHashtags, &mappings).unwrap();
            let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(
                value,
                json!({ "productHashtags": [{ "productId": 3, "hashtagIds": [1, 2] }] })
            );
        }

        #[test]
        fn test_decode_keeps_price_representation() {
            let doc = br#"{"products":[{"id":1,"name":"Pen","description":"Blue","price":1000},
                {"id":2,"name":"Cup","description":"Mug","price":9.5}]}"#;
            let products: Vec<Product> = decode(Collection::Products, doc).unwrap();
            assert_eq!(products.len(), 2);
            assert_eq!(products[0].price.to_string(), "1000");
            assert_eq!(products[1].price.to_string(), "9.5");
        }

        #[test]
        fn test_decode_malformed_json() {
            let result: Result<Vec<Product>, _> = decode(Collection::Products, b"{not json");
            assert!(matches!(result, Err(StorageError::Parse { .. })));
        }

        #[test]
        fn test_decode_missing_envelope() {
            let result: Result<Vec<Product>, _> = decode(Collection::Products, br#"{"items":[]}"#);
            assert!(matches!(result, Err(StorageError::MissingEnvelope { .. })));

            let result: Result<Vec<Product>, _> =
                decode(Collection::Products, br#"{"products":{}}"#);
            assert!(matches!(result, Err(StorageError::MissingEnvelope { .. })));
        }

        #[test]
        fn test_unknown_fields_survive_a_rewrite() {
            let doc = br#"{"products":[{"id":1,"name":"Pen","description":"Blue","price":"1000",
                "hashtags":[{"id":1,"hashtag_name":"office"}]}]}"#;
            let products: Vec<Product> = decode(Collection::Products, doc).unwrap();
            assert_eq!(products[0].price, json!("1000"));

            let bytes = encode(Collection::Products, &products).unwrap();
            let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(
                value["products"][0]["hashtags"],
                json!([{ "id": 1, "hashtag_name": "office" }])
            );
            assert_eq!(value["products"][0]["price"], json!("1000"));
        }

        #[test]
        fn test_decode_wrong_entity_shape() {
            let result: Result<Vec<Hashtag>, _> =
                decode(Collection::Hashtags, br#"{"hashtags":[{"id":"x"}]}"#);
            assert!(matches!(result, Err(StorageError::Parse { .. })));
        }
    }

    mod id_policy_tests {
        use crate::db::IdPolicy;
        use crate::models::Hashtag;

        fn hashtags(ids: &[i64]) -> Vec<Hashtag> {
            ids.iter()
                .map(|&id| Hashtag::new(id, format!("tag{}", id)))
                .collect()
        }

        #[test]
        fn test_sequential_uses_length() {
            assert_eq!(IdPolicy::Sequential.next_id::<Hashtag>(&[]), 1);
            assert_eq!(IdPolicy::Sequential.next_id(&hashtags(&[1, 3])), 3);
        }

        #[test]
        fn test_next_after_max() {
            assert_eq!(IdPolicy::NextAfterMax.next_id::<Hashtag>(&[]), 1);
            assert_eq!(IdPolicy::NextAfterMax.next_id(&hashtags(&[1, 3])), 4);
        }

        #[test]
        fn test_default_policy_is_sequential() {
            assert_eq!(IdPolicy::default(), IdPolicy::Sequential);
        }
    }

    mod config_tests {
        use crate::db::IdPolicy;
        use crate::Config;
        use std::path::PathBuf;

        #[test]
        fn test_empty_config_uses_defaults() {
            let config = Config::parse("").unwrap();
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.storage.dir, PathBuf::from("db"));
            assert_eq!(
                config.storage.product_hashtags,
                PathBuf::from("productHashtags.json")
            );
            assert_eq!(config.ids.policy, IdPolicy::Sequential);
        }

        #[test]
        fn test_parse_overrides() {
            let config = Config::parse(
                r#"
                [server]
                port = 8080

                [storage]
                dir = "data"
                products = "/var/lib/catalog/products.json"

                [ids]
                policy = "next_after_max"
                "#,
            )
            .unwrap();
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.storage.dir, PathBuf::from("data"));
            assert_eq!(
                config.storage.products,
                PathBuf::from("/var/lib/catalog/products.json")
            );
            assert_eq!(config.ids.policy, IdPolicy::NextAfterMax);
        }

        #[test]
        fn test_rejects_empty_storage_dir() {
            assert!(Config::parse("[storage]\ndir = \"\"").is_err());
        }

        #[test]
        fn test_rejects_unknown_policy() {
            assert!(Config::parse("[ids]\npolicy = \"random\"").is_err());
        }

        #[test]
        fn test_default_config_round_trips_through_toml() {
            let text = Config::default().to_toml().unwrap();
            let config = Config::parse(&text).unwrap();
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.ids.policy, IdPolicy::Sequential);
        }
    }
}
