use super::*;
use crate::{
    domain::{ActionKind, EphemeralUserId},
    protocol::EventPayload,
};

fn sample(id: &str) -> Course {
    course(
        id,
        "Sample",
        "Someone",
        10.0,
        "1 week",
        Level::Beginner,
        0,
        3.0,
        "",
        "Misc",
        "*",
    )
}

#[test]
fn builtin_catalog_keeps_listing_order_and_ids() {
    let catalog = Catalog::builtin();
    let ids: Vec<&str> = catalog.iter().map(|course| course.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "java-fundamentals",
            "react-mastery",
            "python-data-science",
            "kubernetes-basics",
            "spring-boot-microservices",
            "aws-cloud-practitioner",
        ]
    );
    Catalog::new(catalog.iter().cloned().collect()).expect("builtin catalog is valid");
}

#[test]
fn get_returns_course_by_id() {
    let catalog = Catalog::builtin();
    let java = catalog
        .get(&CourseId::from("java-fundamentals"))
        .expect("java course");
    assert_eq!(java.title, "Java Programming Fundamentals");
    assert_eq!(java.price, 89.99);
    assert!(catalog.get(&CourseId::from("cobol-101")).is_none());
}

#[test]
fn rejects_duplicate_ids() {
    let err = Catalog::new(vec![sample("a"), sample("a")]).expect_err("duplicate");
    assert!(matches!(err, CatalogError::DuplicateId(id) if id.as_str() == "a"));
}

#[test]
fn rejects_empty_id() {
    let err = Catalog::new(vec![sample("ok"), sample("  ")]).expect_err("empty id");
    assert!(matches!(err, CatalogError::EmptyId { index: 1 }));
}

#[test]
fn rejects_negative_price_and_out_of_range_rating() {
    let mut cheap = sample("cheap");
    cheap.price = -1.0;
    assert!(matches!(
        Catalog::new(vec![cheap]),
        Err(CatalogError::InvalidPrice { .. })
    ));

    let mut stellar = sample("stellar");
    stellar.rating = 5.5;
    assert!(matches!(
        Catalog::new(vec![stellar]),
        Err(CatalogError::InvalidRating { .. })
    ));

    let mut free = sample("free");
    free.price = 0.0;
    free.rating = 0.0;
    Catalog::new(vec![free]).expect("zero price and rating are allowed");
}

#[test]
fn loads_catalog_from_json_records() {
    let raw = r#"[{
        "id": "rust-intro",
        "title": "Intro to Rust",
        "instructor": "Ferris",
        "price": 49.5,
        "duration": "4 weeks",
        "level": "Beginner",
        "students": 120,
        "rating": 4.9,
        "description": "Ownership from first principles.",
        "category": "Programming",
        "icon": "🦀"
    }]"#;
    let catalog = Catalog::from_json_str(raw).expect("catalog");
    assert_eq!(catalog.len(), 1);
    let rust = catalog.get(&CourseId::from("rust-intro")).expect("course");
    assert_eq!(rust.duration_label, "4 weeks");
    assert_eq!(rust.student_count, 120);
    assert_eq!(rust.icon_glyph, "🦀");
}

#[test]
fn malformed_catalog_document_is_reported() {
    let err = Catalog::from_json_str("{\"id\": 1}").expect_err("not an array");
    assert!(matches!(err, CatalogError::Malformed(_)));
}

#[test]
fn purchase_payload_uses_buy_wire_shape() {
    let catalog = Catalog::builtin();
    let java = catalog
        .get(&CourseId::from("java-fundamentals"))
        .expect("java course");
    let payload =
        EventPayload::for_action(java, ActionKind::Purchase, EphemeralUserId::from("user_abc"));
    let value = serde_json::to_value(&payload).expect("json");
    assert_eq!(
        value,
        serde_json::json!({
            "courseId": "java-fundamentals",
            "userId": "user_abc",
            "price": 89.99,
        })
    );
}

#[test]
fn enrollment_payloads_carry_enrollment_type() {
    let catalog = Catalog::builtin();
    let react = catalog
        .get(&CourseId::from("react-mastery"))
        .expect("react course");

    let trial = EventPayload::for_action(
        react,
        ActionKind::FreeTrialEnrollment,
        EphemeralUserId::from("user_1"),
    );
    let audit = EventPayload::for_action(
        react,
        ActionKind::AuditEnrollment,
        EphemeralUserId::from("user_2"),
    );

    assert_eq!(
        serde_json::to_value(&trial).expect("json"),
        serde_json::json!({
            "courseId": "react-mastery",
            "userId": "user_1",
            "enrollmentType": "free-trial",
        })
    );
    assert_eq!(
        serde_json::to_value(&audit).expect("json")["enrollmentType"],
        "audit"
    );
}

#[test]
fn action_kinds_map_to_collector_endpoints() {
    assert_eq!(ActionKind::Purchase.endpoint_path(), "/api/events/buy");
    assert_eq!(
        ActionKind::FreeTrialEnrollment.endpoint_path(),
        "/api/events/enroll"
    );
    assert_eq!(ActionKind::AuditEnrollment.endpoint_path(), "/api/events/enroll");
    assert_eq!(ActionKind::parse("Free-Trial"), Some(ActionKind::FreeTrialEnrollment));
    assert_eq!(ActionKind::parse("buy"), Some(ActionKind::Purchase));
    assert_eq!(ActionKind::parse("refund"), None);
}
