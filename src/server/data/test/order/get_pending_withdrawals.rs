use super::*;

/// Tests only withdrawal types in a pending status are returned.
///
/// Expected: Ok with the two pending withdrawals
#[tokio::test]
async fn returns_pending_withdrawals_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Order)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::order::OrderFactory::new(db, "user-1")
        .order_type("withdrawal")
        .status("pending_review")
        .unapproved()
        .build()
        .await?;
    factory::order::OrderFactory::new(db, "user-1")
        .order_type("wallet_redeem")
        .status("PENDING_REVIEW")
        .unapproved()
        .build()
        .await?;
    factory::order::OrderFactory::new(db, "user-1")
        .order_type("deposit")
        .status("pending")
        .unapproved()
        .build()
        .await?;
    factory::order::OrderFactory::new(db, "user-1")
        .order_type("withdrawal")
        .build()
        .await?;

    let orders = OrderRepository::new(db).get_pending_withdrawals().await?;

    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.is_pending_withdrawal()));

    Ok(())
}
