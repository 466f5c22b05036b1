//! Macro-generated test suite for the `CustomerStore` + `OrderStore` contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use order_tracking::storage::InMemoryStore;
//! use storage_harness::*;
//!
//! store_contract_tests!(InMemoryStore::new());
//! ```
//!
//! # Generated Tests
//!
//! ## Customers
//! - `test_create_and_get_customer`: ids are assigned, values trimmed
//! - `test_get_missing_customer`: unknown id returns None
//! - `test_duplicate_email_rejected`: case-insensitive uniqueness
//! - `test_invalid_customer_rejected`: blank name / bad email never stored
//!
//! ## Orders
//! - `test_create_order_with_items`: one write assigns every id and timestamp
//! - `test_get_order_round_trip`: items come back in insertion order
//! - `test_long_sku_and_name_are_stored`: no backend-specific length limit
//! - `test_get_missing_order`: unknown id returns None
//! - `test_order_for_unknown_customer`: foreign key is enforced
//! - `test_order_ids_increase`
//!
//! ## Concurrency
//! - `test_concurrent_order_creates`: parallel writers get distinct ids

/// Generate a full store conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing both
/// `CustomerStore` and `OrderStore`, plus `Clone + 'static` for the
/// concurrency test. It is re-evaluated for each test.
#[macro_export]
macro_rules! store_contract_tests {
    ($factory:expr) => {
        mod store_contract_tests {
            use super::*;
            use order_tracking::core::entity::{NewCustomer, OrderStatus};
            use order_tracking::core::error::{AppError, ConstraintViolation};
            use order_tracking::core::store::{CustomerStore, OrderStore};

            // ==================================================================
            // Customers
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get_customer() {
                let store = $factory;

                let created = CustomerStore::create(
                    &store,
                    NewCustomer::new("  Ada Lovelace ", " ada@example.com "),
                )
                .await
                .unwrap();

                assert!(created.id >= 1);
                assert_eq!(created.name, "Ada Lovelace");
                assert_eq!(created.email, "ada@example.com");

                let fetched = CustomerStore::get(&store, created.id).await.unwrap();
                assert_eq!(fetched, Some(created));
            }

            #[tokio::test]
            async fn test_get_missing_customer() {
                let store = $factory;
                assert!(CustomerStore::get(&store, 424242).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_duplicate_email_rejected() {
                let store = $factory;

                CustomerStore::create(&store, NewCustomer::new("Ada", "ada@example.com"))
                    .await
                    .unwrap();

                let err = CustomerStore::create(&store, NewCustomer::new("Ada 2", "ADA@Example.com"))
                    .await
                    .unwrap_err();

                assert!(matches!(
                    err,
                    AppError::Constraint(ConstraintViolation::DuplicateEmail { .. })
                ));
            }

            #[tokio::test]
            async fn test_invalid_customer_rejected() {
                let store = $factory;

                let err = CustomerStore::create(&store, NewCustomer::new("   ", "x@example.com"))
                    .await
                    .unwrap_err();
                assert!(matches!(err, AppError::Validation(_)));
                assert_eq!(err.to_string(), "name required");

                let err = CustomerStore::create(&store, NewCustomer::new("Bob", "not-an-email"))
                    .await
                    .unwrap_err();
                assert!(matches!(err, AppError::Validation(_)));

                // Neither attempt consumed the email
                CustomerStore::create(&store, NewCustomer::new("Bob", "x@example.com"))
                    .await
                    .unwrap();
            }

            // ==================================================================
            // Orders
            // ==================================================================

            #[tokio::test]
            async fn test_create_order_with_items() {
                let store = $factory;
                let customer = CustomerStore::create(&store, sample_customer(1)).await.unwrap();

                let order = OrderStore::create_with_items(&store, sample_order(customer.id))
                    .await
                    .unwrap();

                assert!(order.id >= 1);
                assert_eq!(order.customer_id, customer.id);
                assert_eq!(order.status, OrderStatus::Pending);
                assert_eq!(order.total_cents, 2500);
                assert_eq!(order.currency, "USD");
                assert_eq!(order.created_at, order.updated_at);

                assert_eq!(order.items.len(), 2);
                assert!(order.items.iter().all(|item| item.order_id == order.id));
                assert!(order.items[0].id < order.items[1].id);
            }

            #[tokio::test]
            async fn test_get_order_round_trip() {
                let store = $factory;
                let customer = CustomerStore::create(&store, sample_customer(1)).await.unwrap();
                let created = OrderStore::create_with_items(&store, sample_order(customer.id))
                    .await
                    .unwrap();

                let fetched = OrderStore::get(&store, created.id).await.unwrap().unwrap();

                assert_eq!(fetched.id, created.id);
                assert_eq!(fetched.total_cents, 2500);
                assert_eq!(fetched.items, created.items);

                let skus: Vec<&str> = fetched.items.iter().map(|i| i.sku.as_str()).collect();
                assert_eq!(skus, vec!["SKU-1", "SKU-2"]);
                let line_totals: i64 = fetched.items.iter().map(|i| i.line_total()).sum();
                assert_eq!(line_totals, fetched.total_cents);
            }

            #[tokio::test]
            async fn test_long_sku_and_name_are_stored() {
                let store = $factory;
                let customer = CustomerStore::create(&store, sample_customer(1)).await.unwrap();

                let mut order = sample_order(customer.id);
                order.items[0].sku = "S".repeat(300);
                order.items[0].name = "N".repeat(1000);

                let created = OrderStore::create_with_items(&store, order).await.unwrap();
                let fetched = OrderStore::get(&store, created.id).await.unwrap().unwrap();

                assert_eq!(fetched.items[0].sku.len(), 300);
                assert_eq!(fetched.items[0].name.len(), 1000);
            }

            #[tokio::test]
            async fn test_get_missing_order() {
                let store = $factory;
                assert!(OrderStore::get(&store, 999).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_order_for_unknown_customer() {
                let store = $factory;

                let err = OrderStore::create_with_items(&store, sample_order(777))
                    .await
                    .unwrap_err();

                assert!(matches!(
                    err,
                    AppError::Constraint(ConstraintViolation::UnknownCustomer { customer_id: 777 })
                ));
            }

            #[tokio::test]
            async fn test_order_ids_increase() {
                let store = $factory;
                let customer = CustomerStore::create(&store, sample_customer(1)).await.unwrap();

                let first = OrderStore::create_with_items(&store, sample_order(customer.id))
                    .await
                    .unwrap();
                let second = OrderStore::create_with_items(&store, sample_order(customer.id))
                    .await
                    .unwrap();

                assert!(second.id > first.id);
                assert!(second.items[0].id > first.items[1].id);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_order_creates() {
                let store = $factory;
                let customer = CustomerStore::create(&store, sample_customer(1)).await.unwrap();

                let mut handles = Vec::new();
                for _ in 0..8 {
                    let store = store.clone();
                    let customer_id = customer.id;
                    handles.push(tokio::spawn(async move {
                        OrderStore::create_with_items(&store, sample_order(customer_id))
                            .await
                            .unwrap()
                    }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    let order = handle.await.unwrap();
                    assert_eq!(order.items.len(), 2);
                    ids.push(order.id);
                }

                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), 8);
            }
        }
    };
}
