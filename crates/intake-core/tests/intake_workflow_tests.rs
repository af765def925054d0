//! End-to-end intake workflow tests.
//!
//! These drive a session the way a presentation layer would: record
//! samples, confirm or clear, review, and export.

use intake_core::{
    read_csv, write_csv, DatasheetError, EntryPatch, IntakeSession, Tier,
};

#[test]
fn full_entry_lifecycle() {
    let mut session = IntakeSession::new();

    session.set_identifier("ABC");
    session.set_name("Paracetamol");
    session.set_bulk_quantity(5);
    session.add_sample(Tier::Box, 10.0).unwrap();
    session.add_sample(Tier::Box, 12.0).unwrap();
    session.add_sample(Tier::Unit, 2.0).unwrap();

    let index = session.confirm().unwrap();
    assert_eq!(index, 0);

    // Candidate resets, ready for the next entry
    assert!(session.candidate().is_empty());

    let entry = &session.entries()[0];
    assert_eq!(entry.identifier, "ABC");
    assert_eq!(entry.name, "Paracetamol");
    assert_eq!(entry.averages.get(Tier::Box), 11.0);
    assert_eq!(entry.averages.get(Tier::Strip), 0.0);
    assert_eq!(entry.averages.get(Tier::Unit), 2.0);
    assert_eq!(entry.bulk_quantity, 5);
    assert_eq!(entry.computed_quantity, 10); // 5 + floor(11.0 / 2.0)
}

#[test]
fn rejected_sample_leaves_tier_untouched() {
    let mut session = IntakeSession::new();
    assert!(session.add_sample(Tier::Box, -1.0).is_err());
    assert_eq!(session.candidate().weights.count(Tier::Box), 0);
}

#[test]
fn failed_confirm_preserves_samples_for_retry() {
    let mut session = IntakeSession::new();
    session.set_name("Paracetamol");
    session.add_sample(Tier::Box, 10.0).unwrap();
    session.add_sample(Tier::Box, 12.0).unwrap();

    assert_eq!(
        session.confirm(),
        Err(DatasheetError::MissingRequiredField("identifier"))
    );
    assert!(session.entries().is_empty());

    // Fill in the missing field and retry; weights were kept
    session.set_identifier("ABC");
    session.confirm().unwrap();
    assert_eq!(session.entries()[0].averages.get(Tier::Box), 11.0);
}

#[test]
fn quantity_falls_back_to_bulk_without_unit_average() {
    let mut session = IntakeSession::new();
    session.set_identifier("XYZ");
    session.set_name("Ibuprofen");
    session.set_bulk_quantity(30);
    session.add_sample(Tier::Box, 250.0).unwrap();
    // No unit samples: box/unit ratio is undefined

    session.confirm().unwrap();
    assert_eq!(session.entries()[0].computed_quantity, 30);
}

#[test]
fn review_edit_and_delete() {
    let mut session = IntakeSession::new();
    for (id, name) in [("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")] {
        session.set_identifier(id);
        session.set_name(name);
        session.confirm().unwrap();
    }

    let patch = EntryPatch {
        name: Some("Betamethasone".into()),
        ..Default::default()
    };
    session.edit_entry(1, &patch).unwrap();
    assert_eq!(session.entries()[1].name, "Betamethasone");

    let removed = session.delete_entry(0).unwrap();
    assert_eq!(removed.identifier, "A");
    assert_eq!(session.entries().len(), 2);
    assert_eq!(session.entries()[0].identifier, "B");

    // Stale index past the new end
    assert_eq!(
        session.delete_entry(2),
        Err(DatasheetError::IndexOutOfRange { index: 2, len: 2 })
    );

    // Re-insert the removed row at the front
    session.insert_entry(0, removed).unwrap();
    assert_eq!(session.entries()[0].identifier, "A");
}

#[test]
fn csv_export_and_round_trip() {
    let mut session = IntakeSession::new();
    session.set_identifier("ABC-123");
    session.set_name("Amoxicillin, 500mg");
    session.set_bulk_quantity(12);
    session.add_sample(Tier::Box, 95.5).unwrap();
    session.add_sample(Tier::Strip, 9.25).unwrap();
    session.add_sample(Tier::Unit, 0.65).unwrap();
    session.confirm().unwrap();

    let first = session.export_csv().unwrap();
    let text = String::from_utf8(first.clone()).unwrap();
    assert!(text.starts_with(
        "identifier,name,average_weight_box,average_weight_strip,average_weight_unit,bulk_quantity,computed_quantity\n"
    ));
    // Comma in the name forces quoting
    assert!(text.contains("\"Amoxicillin, 500mg\""));

    let imported = read_csv(&first).unwrap();
    let second = write_csv(&imported).unwrap();
    assert_eq!(first, second);
}

#[test]
fn json_export_matches_sheet() {
    let mut session = IntakeSession::new();
    session.set_identifier("ABC");
    session.set_name("Paracetamol");
    session.confirm().unwrap();

    let json = session.export_json().unwrap();
    assert!(json.contains("\"row_count\": 1"));
    assert!(json.contains("\"identifier\": \"ABC\""));
}

/// Named quantity-derivation cases.
struct QuantityCase {
    id: &'static str,
    box_samples: &'static [f64],
    unit_samples: &'static [f64],
    bulk: u32,
    expected: u64,
}

#[test]
fn quantity_derivation_cases() {
    let cases = [
        QuantityCase {
            id: "exact-division",
            box_samples: &[10.0],
            unit_samples: &[2.0],
            bulk: 0,
            expected: 5,
        },
        QuantityCase {
            id: "floors-fraction",
            box_samples: &[10.0, 12.0],
            unit_samples: &[2.0],
            bulk: 5,
            expected: 10,
        },
        QuantityCase {
            id: "bulk-only",
            box_samples: &[],
            unit_samples: &[],
            bulk: 7,
            expected: 7,
        },
        QuantityCase {
            id: "no-box-weighed",
            box_samples: &[],
            unit_samples: &[0.5],
            bulk: 3,
            expected: 3, // floor(0 / 0.5) contributes nothing
        },
    ];

    for case in cases {
        let mut session = IntakeSession::new();
        session.set_identifier(case.id);
        session.set_name("drug");
        session.set_bulk_quantity(case.bulk);
        for grams in case.box_samples {
            session.add_sample(Tier::Box, *grams).unwrap();
        }
        for grams in case.unit_samples {
            session.add_sample(Tier::Unit, *grams).unwrap();
        }
        session.confirm().unwrap();
        assert_eq!(
            session.entries()[0].computed_quantity,
            case.expected,
            "case {}",
            case.id
        );
    }
}
