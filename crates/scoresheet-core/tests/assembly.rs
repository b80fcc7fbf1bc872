//! End-to-end assembly tests over an in-memory snapshot.

use chrono::NaiveDate;

use scoresheet_core::assemble::ScoreSheetAssembler;
use scoresheet_core::deadline::deadline_for;
use scoresheet_core::locale::Locale;
use scoresheet_core::snapshot::{
    EnrollmentRecord, EntityAddressRecord, MemorySnapshot, OfferingEntityLink, SessionDeadline,
};
use scoresheet_model::{
    AddressChoice, Attribution, AttributionId, CourseOffering, DeadlineRecord, EnrollmentId,
    EnrollmentState, EntityId, EntityRole, EntityVersion, ExamEnrollment, Instructor,
    LearningUnitOffering, OfferingId, OrganizationalEntity, PersonAddress, PersonAddressLabel,
    PostalAddress, ScoreSheetAddressPreference, ScoresResponsible, SheetError, Student, UnitId,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn instructor(first: &str, last: &str) -> Instructor {
    Instructor {
        first_name: first.to_string(),
        last_name: last.to_string(),
        addresses: vec![
            PersonAddress {
                label: PersonAddressLabel::Professional,
                address: PostalAddress {
                    city: Some("Louvain-la-Neuve".to_string()),
                    ..PostalAddress::default()
                },
            },
            PersonAddress {
                label: PersonAddressLabel::Private,
                address: PostalAddress {
                    city: Some("Brussels".to_string()),
                    ..PostalAddress::default()
                },
            },
        ],
    }
}

fn enrollment_record(
    id: u64,
    unit: u64,
    offering: u64,
    registration_id: &str,
    first: &str,
    last: &str,
    state: EnrollmentState,
) -> EnrollmentRecord {
    EnrollmentRecord {
        enrollment: ExamEnrollment {
            id: EnrollmentId(id),
            unit_id: UnitId(unit),
            offering_id: OfferingId(offering),
            session: 1,
            student: Student {
                registration_id: registration_id.to_string(),
                first_name: first.to_string(),
                last_name: last.to_string(),
            },
        },
        state,
    }
}

fn session_deadline(enrollment: u64) -> SessionDeadline {
    SessionDeadline {
        enrollment_id: EnrollmentId(enrollment),
        session: 1,
        record: DeadlineRecord {
            deadline: date(2017, 3, 1),
            deadline_tutor: None,
        },
    }
}

/// One learning unit, one program, three enrolled students and one
/// not-enrolled student, with a single flagged score responsible.
fn base_snapshot() -> MemorySnapshot {
    MemorySnapshot {
        entities: vec![OrganizationalEntity {
            id: EntityId(10),
            parent: None,
            email: Some("agro@example.org".to_string()),
        }],
        entity_versions: vec![EntityVersion {
            entity_id: EntityId(10),
            acronym: "AGRO".to_string(),
            title: "Faculty of Bioengineering".to_string(),
            start_date: date(2015, 1, 1),
            end_date: None,
        }],
        entity_addresses: vec![EntityAddressRecord {
            entity_id: EntityId(10),
            address: PostalAddress {
                city: Some("Louvain-la-Neuve".to_string()),
                country_code: Some("BE".to_string()),
                ..PostalAddress::default()
            },
        }],
        offerings: vec![CourseOffering {
            id: OfferingId(1),
            acronym: "BIR1BA".to_string(),
            academic_year: 2016,
        }],
        offering_entities: vec![OfferingEntityLink {
            offering_id: OfferingId(1),
            role: EntityRole::Administration,
            entity_id: EntityId(10),
        }],
        address_preferences: vec![ScoreSheetAddressPreference {
            offering_id: OfferingId(1),
            choice: AddressChoice::EntityAdministration,
        }],
        learning_units: vec![LearningUnitOffering {
            id: UnitId(1),
            acronym: "LBIR1100".to_string(),
            academic_year: 2016,
            decimal_scores: false,
        }],
        attributions: vec![
            Attribution {
                id: AttributionId(1),
                unit_id: UnitId(1),
                instructor: instructor("Paul", "Alibra"),
                score_responsible: false,
            },
            Attribution {
                id: AttributionId(2),
                unit_id: UnitId(1),
                instructor: instructor("Thomas", "Durant"),
                score_responsible: true,
            },
            Attribution {
                id: AttributionId(3),
                unit_id: UnitId(1),
                instructor: instructor("Pierre", "Lobradi"),
                score_responsible: false,
            },
        ],
        enrollments: vec![
            enrollment_record(1, 1, 1, "00000001", "Jacques", "Dupont", EnrollmentState::Enrolled),
            enrollment_record(2, 1, 1, "00000002", "Axel", "Dupont", EnrollmentState::Enrolled),
            enrollment_record(3, 1, 1, "00000003", "Zoe", "Armand", EnrollmentState::Enrolled),
            enrollment_record(
                4,
                1,
                1,
                "00000004",
                "Zoe",
                "Armand",
                EnrollmentState::NotEnrolled,
            ),
        ],
        deadlines: vec![
            session_deadline(1),
            session_deadline(2),
            session_deadline(3),
            session_deadline(4),
        ],
    }
}

#[test]
fn assembles_the_single_unit_scenario() {
    let snapshot = base_snapshot();
    let locale = Locale::default();
    let assembler = ScoreSheetAssembler::new(&snapshot, &locale);
    let sheet = assembler
        .build_at(&snapshot.exam_enrollments(), date(2017, 1, 15))
        .expect("assemble sheet");

    assert_eq!(sheet.publication_date, "15/1/2017");
    assert_eq!(sheet.learning_unit_years.len(), 1);

    let block = &sheet.learning_unit_years[0];
    assert_eq!(block.acronym, "LBIR1100");
    assert!(!block.decimal_scores);
    assert_eq!(block.address.city, "Louvain-la-Neuve");
    assert_eq!(block.address.recipient, "AGRO - Faculty of Bioengineering");
    match &block.scores_responsible {
        ScoresResponsible::Single {
            first_name,
            last_name,
            address,
        } => {
            assert_eq!(first_name, "Thomas");
            assert_eq!(last_name, "Durant");
            assert_eq!(address.city, "Louvain-la-Neuve");
        }
        ScoresResponsible::All { .. } => panic!("expected a single responsible"),
    }

    assert_eq!(block.programs.len(), 1);
    let rows = &block.programs[0].enrollments;
    assert_eq!(rows.len(), 4);
    for row in rows {
        if row.registration_id == "00000004" {
            assert_eq!(row.deadline, "");
        } else {
            assert_eq!(row.deadline, "1/3/2017");
        }
    }
    // Rows ordered by name, registration id breaking the tie.
    let order: Vec<&str> = rows
        .iter()
        .map(|row| row.registration_id.as_str())
        .collect();
    assert_eq!(order, vec!["00000003", "00000004", "00000002", "00000001"]);
}

#[test]
fn not_enrolled_state_blanks_the_deadline_despite_a_record() {
    let snapshot = base_snapshot();
    let locale = Locale::default();
    let not_enrolled = &snapshot.enrollments[3].enrollment;
    assert_eq!(deadline_for(&snapshot, &locale, not_enrolled), "");
}

#[test]
fn enrolled_without_a_deadline_record_is_blank_too() {
    let mut snapshot = base_snapshot();
    snapshot
        .deadlines
        .retain(|entry| entry.enrollment_id != EnrollmentId(1));
    let locale = Locale::default();
    let enrolled = &snapshot.enrollments[0].enrollment;
    assert_eq!(deadline_for(&snapshot, &locale, enrolled), "");
}

#[test]
fn tutor_deadline_wins_when_present() {
    let mut snapshot = base_snapshot();
    snapshot.deadlines[0].record.deadline_tutor = Some(date(2017, 2, 20));
    let locale = Locale::default();
    let enrolled = &snapshot.enrollments[0].enrollment;
    assert_eq!(deadline_for(&snapshot, &locale, enrolled), "20/2/2017");
}

#[test]
fn groups_by_learning_unit_then_by_program() {
    let mut snapshot = base_snapshot();
    snapshot.offerings.push(CourseOffering {
        id: OfferingId(2),
        acronym: "ARCH1BA".to_string(),
        academic_year: 2016,
    });
    snapshot.learning_units.push(LearningUnitOffering {
        id: UnitId(2),
        acronym: "LDROI1200".to_string(),
        academic_year: 2016,
        decimal_scores: true,
    });
    snapshot.enrollments.extend([
        enrollment_record(5, 2, 1, "00000005", "Marie", "Curie", EnrollmentState::Enrolled),
        enrollment_record(6, 2, 2, "00000006", "Jean", "Petit", EnrollmentState::Enrolled),
    ]);
    let locale = Locale::default();
    let assembler = ScoreSheetAssembler::new(&snapshot, &locale);
    let sheet = assembler
        .build_at(&snapshot.exam_enrollments(), date(2017, 1, 15))
        .expect("assemble sheet");

    // One block per distinct learning unit, ordered by acronym.
    assert_eq!(sheet.learning_unit_years.len(), 2);
    assert_eq!(sheet.learning_unit_years[0].acronym, "LBIR1100");
    assert_eq!(sheet.learning_unit_years[1].acronym, "LDROI1200");
    assert!(sheet.learning_unit_years[1].decimal_scores);

    // One program sublist per distinct program within the unit.
    let second = &sheet.learning_unit_years[1];
    assert_eq!(second.programs.len(), 2);
    assert_eq!(second.programs[0].acronym, "ARCH1BA");
    assert_eq!(second.programs[1].acronym, "BIR1BA");
}

#[test]
fn all_instructors_listed_when_none_is_flagged() {
    let mut snapshot = base_snapshot();
    for attribution in &mut snapshot.attributions {
        attribution.score_responsible = false;
    }
    let locale = Locale::default();
    let assembler = ScoreSheetAssembler::new(&snapshot, &locale);
    let sheet = assembler
        .build_at(&snapshot.exam_enrollments(), date(2017, 1, 15))
        .expect("assemble sheet");
    match &sheet.learning_unit_years[0].scores_responsible {
        ScoresResponsible::All { instructors } => {
            let names: Vec<&str> = instructors
                .iter()
                .map(|name| name.last_name.as_str())
                .collect();
            assert_eq!(names, vec!["Alibra", "Durant", "Lobradi"]);
        }
        ScoresResponsible::Single { .. } => panic!("expected the full instructor list"),
    }
}

#[test]
fn ambiguous_flags_resolve_to_the_lowest_attribution_id() {
    let mut snapshot = base_snapshot();
    snapshot.attributions[0].score_responsible = true;
    let locale = Locale::default();
    let assembler = ScoreSheetAssembler::new(&snapshot, &locale);
    let sheet = assembler
        .build_at(&snapshot.exam_enrollments(), date(2017, 1, 15))
        .expect("assemble sheet");
    match &sheet.learning_unit_years[0].scores_responsible {
        ScoresResponsible::Single { last_name, .. } => assert_eq!(last_name, "Alibra"),
        ScoresResponsible::All { .. } => panic!("expected a single responsible"),
    }
}

#[test]
fn identical_inputs_yield_identical_documents() {
    let snapshot = base_snapshot();
    let locale = Locale::default();
    let assembler = ScoreSheetAssembler::new(&snapshot, &locale);
    let enrollments = snapshot.exam_enrollments();
    let first = assembler
        .build_at(&enrollments, date(2017, 1, 15))
        .expect("first build");
    let second = assembler
        .build_at(&enrollments, date(2017, 1, 15))
        .expect("second build");
    assert_eq!(first, second);

    // A later publication date changes nothing but the stamp.
    let later = assembler
        .build_at(&enrollments, date(2017, 1, 16))
        .expect("later build");
    assert_eq!(later.publication_date, "16/1/2017");
    assert_eq!(later.learning_unit_years, first.learning_unit_years);
}

#[test]
fn dangling_unit_reference_propagates_as_an_error() {
    let snapshot = base_snapshot();
    let locale = Locale::default();
    let assembler = ScoreSheetAssembler::new(&snapshot, &locale);
    let mut enrollments = snapshot.exam_enrollments();
    enrollments[0].unit_id = UnitId(99);
    let error = assembler
        .build_at(&enrollments, date(2017, 1, 15))
        .expect_err("unknown unit must fail");
    assert!(matches!(error, SheetError::UnknownUnit(UnitId(99))));
}
