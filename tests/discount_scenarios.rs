use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use travel_discounts::config::policy::DiscountPolicy;
use travel_discounts::discount::{CouponRule, LastMinuteRule, LoyaltyDiscounter, LoyaltyRule, coupon, last_minute};
use travel_discounts::error::DiscountError;
use travel_discounts::pricing::Price;
use travel_discounts::time::FixedClock;
use travel_discounts::travel::{InMemoryTravelHistory, TravelRecord};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

fn price(v: rust_decimal::Decimal) -> Price {
    Price::new(v).unwrap()
}

const TRAVELS_JSON: &str = r#"[
    {"from": "2021-01-01T00:00:00Z", "bought_by": "333"},
    {"from": "2021-06-13T12:11:10Z", "bought_by": "333"},
    {"from": "2021-12-31T23:59:59Z", "bought_by": "333"},
    {"from": "2021-03-12T00:00:00Z", "bought_by": "555"},
    {"from": "2019-07-07T23:59:59Z", "bought_by": "555"},
    {"from": "2022-01-14T23:59:59Z", "bought_by": "555"}
]"#;

fn loyalty_discounter(now: DateTime<Utc>) -> LoyaltyDiscounter {
    let history = InMemoryTravelHistory::from_json(TRAVELS_JSON).unwrap();
    LoyaltyDiscounter::new(Arc::new(FixedClock::new(now)), Arc::new(history))
}

#[test]
fn coupon_scenarios() {
    let now = at(2021, 5, 3, 12, 11, 10);

    assert_eq!(coupon::apply(Price::from(100), "CHEAPER_TRAVEL_2021", now), Price::from(80));
    assert_eq!(coupon::apply(Price::from(100), "wrong_coupon", now), Price::from(100));
    assert_eq!(
        coupon::apply(Price::from(100), "CHEAPER_TRAVEL_2021", at(2030, 5, 3, 12, 11, 10)),
        Price::from(100)
    );
}

#[test]
fn last_minute_scenarios() {
    assert_eq!(
        last_minute::apply(Price::from(200), at(2021, 6, 1, 10, 0, 0), at(2021, 5, 20, 12, 11, 10)),
        Price::from(160)
    );
    assert_eq!(
        last_minute::apply(Price::from(123), at(2022, 12, 1, 10, 0, 0), at(2021, 3, 4, 12, 11, 10)),
        Price::from(123)
    );
}

#[test]
fn loyalty_scenarios_with_shared_history() {
    let sut = loyalty_discounter(at(2022, 2, 11, 12, 11, 10));

    // "333" travelled three times in 2021.
    assert_eq!(sut.discount(Price::from(300), "333").unwrap(), Price::from(240));
    // "555" has only one travel in 2021.
    assert_eq!(sut.discount(Price::from(300), "555").unwrap(), Price::from(300));
    // Unknown user.
    assert_eq!(sut.discount(Price::from(300), "777").unwrap(), Price::from(300));
}

#[test]
fn loyalty_rejects_blank_user() {
    let sut = loyalty_discounter(at(2022, 2, 11, 12, 11, 10));

    let err = sut.discount(Price::from(300), "").unwrap_err();
    assert!(matches!(err, DiscountError::MissingUserId));
    assert!(err.is_invalid_argument());
}

#[test]
fn negative_price_is_rejected_at_the_boundary() {
    let err = Price::new(dec!(-10)).unwrap_err();
    assert!(matches!(err, DiscountError::NegativePrice(_)));
}

#[test]
fn no_rule_ever_raises_a_price() {
    let policy = DiscountPolicy::default();
    let coupon_rule = CouponRule::new(policy.coupon.clone());
    let last_minute_rule = LastMinuteRule::new(policy.last_minute.clone());
    let loyalty_rule = LoyaltyRule::new(policy.loyalty.clone());
    let history = InMemoryTravelHistory::from_json(TRAVELS_JSON).unwrap();
    let travels = travel_discounts::travel::TravelHistory::list(&history).unwrap();

    let now = at(2021, 5, 20, 12, 11, 10);
    let amounts = [dec!(0), dec!(0.01), dec!(9.99), dec!(100), dec!(12345.67)];

    for amount in amounts {
        let input = price(amount);
        let outputs = [
            coupon_rule.apply(input, "CHEAPER_TRAVEL_2021", now),
            last_minute_rule.apply(input, at(2021, 5, 25, 0, 0, 0), now),
            loyalty_rule
                .apply(input, "333", &travels, at(2022, 2, 11, 12, 11, 10))
                .unwrap(),
        ];
        for output in outputs {
            assert!(output <= input, "{output} > {input}");
            assert!(output.amount() >= dec!(0));
        }
    }
}

#[test]
fn fixed_record_snapshot_is_not_mutated() {
    let records = vec![TravelRecord::new(at(2021, 1, 1, 0, 0, 0), "333")];
    let history = Arc::new(InMemoryTravelHistory::with_records(records.clone()));
    let sut = LoyaltyDiscounter::new(Arc::new(FixedClock::new(at(2022, 2, 11, 0, 0, 0))), history.clone());

    sut.discount(Price::from(300), "333").unwrap();
    sut.discount(Price::from(300), "333").unwrap();

    assert_eq!(travel_discounts::travel::TravelHistory::list(history.as_ref()).unwrap(), records);
}
