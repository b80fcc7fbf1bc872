//! Score sheet assembly: grouping, resolution, document construction.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use tracing::info;

use scoresheet_model::{
    EnrollmentRow, ExamEnrollment, LearningUnitBlock, LearningUnitOffering, OfferingId,
    ProgramBlock, Result, ScoreSheet,
};

use crate::address::project_address;
use crate::deadline::deadline_for;
use crate::entity::resolve_entity_address;
use crate::locale::Localizer;
use crate::responsible::resolve_responsible;
use crate::store::RecordStore;

/// Stateless, single-pass projection of exam enrollments into a score
/// sheet document. Holds no mutable state across invocations; the only
/// thing that varies between identical builds is the publication date.
pub struct ScoreSheetAssembler<'a, S, L> {
    store: &'a S,
    locale: &'a L,
}

struct ProgramGroup<'a> {
    offering_id: OfferingId,
    rows: Vec<&'a ExamEnrollment>,
}

struct UnitGroup<'a> {
    unit: LearningUnitOffering,
    programs: BTreeMap<String, ProgramGroup<'a>>,
}

impl<'a, S: RecordStore, L: Localizer> ScoreSheetAssembler<'a, S, L> {
    pub fn new(store: &'a S, locale: &'a L) -> Self {
        Self { store, locale }
    }

    /// Assemble a sheet stamped with today's date.
    pub fn build(&self, enrollments: &[ExamEnrollment]) -> Result<ScoreSheet> {
        self.build_at(enrollments, Local::now().date_naive())
    }

    /// Assemble a sheet for a pinned publication date.
    ///
    /// Callers needing a frozen publication date snapshot it here; the
    /// same date over unchanged records yields an identical document.
    /// Dangling unit or offering references propagate as errors; every
    /// other gap resolves to a documented empty value.
    pub fn build_at(&self, enrollments: &[ExamEnrollment], as_of: NaiveDate) -> Result<ScoreSheet> {
        let mut units: BTreeMap<(String, i32), UnitGroup<'_>> = BTreeMap::new();
        for enrollment in enrollments {
            let unit = self.store.learning_unit(enrollment.unit_id)?;
            let offering = self.store.course_offering(enrollment.offering_id)?;
            let key = (unit.acronym.clone(), unit.academic_year);
            let group = units.entry(key).or_insert(UnitGroup {
                unit,
                programs: BTreeMap::new(),
            });
            group
                .programs
                .entry(offering.acronym)
                .or_insert(ProgramGroup {
                    offering_id: offering.id,
                    rows: Vec::new(),
                })
                .rows
                .push(enrollment);
        }

        let mut blocks = Vec::with_capacity(units.len());
        for ((acronym, academic_year), group) in units {
            // The block address follows the unit's first program in
            // acronym order, keeping the pick deterministic when a unit
            // spans several programs.
            let address = group
                .programs
                .values()
                .next()
                .and_then(|program| resolve_entity_address(self.store, program.offering_id, as_of))
                .map(|source| project_address(&source, self.locale))
                .unwrap_or_default();
            let scores_responsible = resolve_responsible(self.store, self.locale, group.unit.id);

            let mut programs = Vec::with_capacity(group.programs.len());
            for (program_acronym, program) in group.programs {
                let mut rows: Vec<EnrollmentRow> = program
                    .rows
                    .iter()
                    .map(|enrollment| EnrollmentRow {
                        registration_id: enrollment.student.registration_id.clone(),
                        last_name: enrollment.student.last_name.clone(),
                        first_name: enrollment.student.first_name.clone(),
                        deadline: deadline_for(self.store, self.locale, enrollment),
                    })
                    .collect();
                rows.sort_by(|a, b| {
                    (
                        a.last_name.as_str(),
                        a.first_name.as_str(),
                        a.registration_id.as_str(),
                    )
                        .cmp(&(
                            b.last_name.as_str(),
                            b.first_name.as_str(),
                            b.registration_id.as_str(),
                        ))
                });
                programs.push(ProgramBlock {
                    acronym: program_acronym,
                    enrollments: rows,
                });
            }

            blocks.push(LearningUnitBlock {
                acronym,
                academic_year,
                decimal_scores: group.unit.decimal_scores,
                address,
                scores_responsible,
                programs,
            });
        }

        info!(
            unit_count = blocks.len(),
            enrollment_count = enrollments.len(),
            "score sheet assembled"
        );
        Ok(ScoreSheet {
            publication_date: as_of.format(self.locale.date_format()).to_string(),
            learning_unit_years: blocks,
        })
    }
}
