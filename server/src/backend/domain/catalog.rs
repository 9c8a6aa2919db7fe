//! Static growth-visit and vaccine-dose catalogs.
//!
//! These tables are identical for every client; only the per-child completion
//! maps vary. Growth-visit ranges are ordered by age and partition 0..=120
//! months with no gaps or overlaps; they drive the "current visit" card.
//! The growth checkpoints are the finer-grained calendar behind the growth
//! view, one entry per recommended check-up age.

use once_cell::sync::Lazy;

use super::models::growth_visit::{GrowthCheckpoint, GrowthVisitDefinition};
use super::models::vaccine_dose::VaccineDoseDefinition;

/// Oldest age (in months) covered by the growth-visit catalog
pub const GROWTH_CATALOG_MAX_MONTHS: u32 = 120;

const MONTHLY_CHECKUP: &str =
    "Consulta mensual de crecimiento y desarrollo. Incluye medición antropométrica y vacunas.";

const fn monthly(id: &'static str, label: &'static str, month: u32) -> GrowthVisitDefinition {
    GrowthVisitDefinition {
        id,
        label,
        age_from_months: month,
        age_to_months: month,
        description: MONTHLY_CHECKUP,
    }
}

pub static GROWTH_VISITS: &[GrowthVisitDefinition] = &[
    GrowthVisitDefinition {
        id: "newborn",
        label: "Recién nacido",
        age_from_months: 0,
        age_to_months: 0,
        description: "Primera cita a los 7 días del nacimiento o según sea el alta hospitalaria.",
    },
    // 1 to 11 months: monthly check-ups
    monthly("m1", "Control de 1 mes", 1),
    monthly("m2", "Control de 2 meses", 2),
    monthly("m3", "Control de 3 meses", 3),
    monthly("m4", "Control de 4 meses", 4),
    monthly("m5", "Control de 5 meses", 5),
    monthly("m6", "Control de 6 meses", 6),
    monthly("m7", "Control de 7 meses", 7),
    monthly("m8", "Control de 8 meses", 8),
    monthly("m9", "Control de 9 meses", 9),
    monthly("m10", "Control de 10 meses", 10),
    monthly("m11", "Control de 11 meses", 11),
    GrowthVisitDefinition {
        id: "12_23m",
        label: "De 12 a 23 meses",
        age_from_months: 12,
        age_to_months: 23,
        description: "Consulta cada 2–3 meses. Seguimiento de hitos del lenguaje, socialización y nutrición.",
    },
    GrowthVisitDefinition {
        id: "2_5y",
        label: "De 2 a 5 años",
        age_from_months: 24,
        age_to_months: 59,
        description: "Al menos cada 6 meses (o más frecuente si hay riesgo). Desarrollo cognitivo, social y nutrición.",
    },
    GrowthVisitDefinition {
        id: "5_10y",
        label: "De 5 a 10 años",
        age_from_months: 60,
        age_to_months: GROWTH_CATALOG_MAX_MONTHS,
        description: "Al menos una vez al año. Crecimiento, desarrollo puberal, psicomotor y hábitos saludables.",
    },
];

const fn checkpoint(
    id: &'static str,
    label: &'static str,
    age_months: u32,
    coverage: &'static str,
) -> GrowthCheckpoint {
    GrowthCheckpoint {
        id,
        label,
        age_months,
        coverage,
    }
}

/// Growth and development calendar, ordered by age
pub static GROWTH_CHECKPOINTS: &[GrowthCheckpoint] = &[
    checkpoint(
        "newborn_7d",
        "Recién nacido (7 días)",
        0,
        "Valoración general, tamizaje neonatal, carnet de salud infantil.",
    ),
    // 1 to 11 months: ideally monthly
    checkpoint("age_1m", "1 mes", 1, "Medición antropométrica, desarrollo psicomotor, nutrición."),
    checkpoint("age_2m", "2 meses", 2, "Seguimiento de crecimiento, desarrollo y vacunas."),
    checkpoint("age_3m", "3 meses", 3, "Desarrollo psicomotor, estimulación y nutrición."),
    checkpoint("age_4m", "4 meses", 4, "Crecimiento, hitos motores, sueño y alimentación."),
    checkpoint("age_5m", "5 meses", 5, "Seguimiento de peso, talla, desarrollo y vacunas."),
    checkpoint("age_6m", "6 meses", 6, "Inicio de alimentación complementaria, desarrollo psicomotor."),
    checkpoint("age_7m", "7 meses", 7, "Crecimiento, desarrollo motor y estimulación."),
    checkpoint("age_8m", "8 meses", 8, "Nutrición, sueño, lenguaje inicial y vínculo."),
    checkpoint("age_9m", "9 meses", 9, "Hitos del desarrollo, estimulación y seguridad en el hogar."),
    checkpoint("age_10m", "10 meses", 10, "Seguimiento de crecimiento y lenguaje temprano."),
    checkpoint("age_11m", "11 meses", 11, "Revisión integral previo al año de vida."),
    // 12 to 23 months: every 2-3 months
    checkpoint(
        "age_12m",
        "12 meses",
        12,
        "Crecimiento, nutrición, lenguaje inicial y socialización, vacunas.",
    ),
    checkpoint("age_15m", "15 meses", 15, "Lenguaje, interacción social y conductas."),
    checkpoint("age_18m", "18 meses", 18, "Hitos del lenguaje, desarrollo social y nutrición."),
    checkpoint("age_21m", "21 meses", 21, "Seguimiento de desarrollo, juego y límites."),
    checkpoint("age_23m", "23 meses", 23, "Preparación para los 2 años, lenguaje y socialización."),
    // 2 to 5 years: at least every 6 months
    checkpoint("age_24m", "2 años", 24, "Desarrollo cognitivo, social y factores de riesgo."),
    checkpoint("age_30m", "2 años y medio", 30, "Lenguaje, juego simbólico y conducta."),
    checkpoint("age_36m", "3 años", 36, "Nutrición, hábitos, desarrollo motor y social."),
    checkpoint("age_42m", "3 años y medio", 42, "Desarrollo cognitivo, juego y habilidades sociales."),
    checkpoint("age_48m", "4 años", 48, "Preparación escolar, lenguaje y conducta."),
    checkpoint("age_54m", "4 años y medio", 54, "Seguimiento de crecimiento y factores de riesgo."),
    checkpoint("age_60m", "5 años", 60, "Desarrollo global, hábitos saludables y socialización."),
    // 5 to 10 years: at least yearly
    checkpoint("age_72m", "6 años", 72, "Crecimiento, desarrollo escolar y hábitos saludables."),
    checkpoint("age_84m", "7 años", 84, "Nutrición, actividad física y sueño."),
    checkpoint("age_96m", "8 años", 96, "Desarrollo psicomotor, social y emocional."),
    checkpoint("age_108m", "9 años", 108, "Hábitos saludables, escuela y factores de riesgo."),
    checkpoint("age_120m", "10 años", 120, "Crecimiento, pubertad temprana y estilo de vida."),
];

const fn dose(
    id: &'static str,
    vaccine: &'static str,
    age_label: &'static str,
    age_months: u32,
) -> VaccineDoseDefinition {
    VaccineDoseDefinition {
        id,
        vaccine,
        age_label,
        age_months,
    }
}

/// Doses of the national immunization schedule (simplified), in catalog order
pub static VACCINE_DOSES: &[VaccineDoseDefinition] = &[
    dose("bcg_birth", "BCG", "Nacimiento", 0),
    dose("hepb_birth", "Hepatitis B", "Nacimiento", 0),
    dose("rota_2m", "Rotavirus", "2 meses", 2),
    dose("rota_4m", "Rotavirus", "4 meses", 4),
    dose("penta_2m", "Pentavalente", "2 meses", 2),
    dose("penta_4m", "Pentavalente", "4 meses", 4),
    dose("penta_6m", "Pentavalente", "6 meses", 6),
    dose("penta_18m", "Pentavalente", "18 meses", 18),
    dose("ipv_2m", "IPV", "2 meses", 2),
    dose("ipv_4m", "IPV", "4 meses", 4),
    dose("ipv_6m", "IPV", "6 meses", 6),
    dose("ipv_18m", "IPV", "18 meses", 18),
    dose("ipv_5y", "IPV", "5 años", 60),
    dose("pcv13_2m", "Neumococo PCV13", "2 meses", 2),
    dose("pcv13_4m", "Neumococo PCV13", "4 meses", 4),
    dose("pcv13_12m", "Neumococo PCV13", "12 meses", 12),
    dose("flu_6m", "Influenza (trivalente)", "6 meses", 6),
    dose("flu_7m", "Influenza (trivalente)", "7 meses", 7),
    dose("flu_12m", "Influenza (trivalente)", "12 meses", 12),
    dose("varicela_12m", "Varicela", "12 meses", 12),
    dose("varicela_5y", "Varicela", "5 años", 60),
    dose("hepa_12m", "Hepatitis A", "12 meses", 12),
    dose("srp_12m", "SRP", "12 meses", 12),
    dose("srp_18m", "SRP", "18 meses", 18),
    dose("yellowfever_18m", "Fiebre amarilla", "18 meses", 18),
    dose("dpt_5y", "DPT", "5 años", 60),
    dose("covid_6m", "SARS-CoV-2", "Desde 6 meses", 6),
];

/// Doses sharing one due age
#[derive(Debug, Clone, PartialEq)]
pub struct DoseGroup {
    pub age_months: u32,
    pub title: &'static str,
    pub doses: Vec<&'static VaccineDoseDefinition>,
}

/// Catalog grouped by due age (ascending); doses inside a group are ordered
/// by vaccine name and the group takes the first dose's age label as title.
pub static VACCINE_DOSE_GROUPS: Lazy<Vec<DoseGroup>> = Lazy::new(|| {
    let mut sorted: Vec<&'static VaccineDoseDefinition> = VACCINE_DOSES.iter().collect();
    sorted.sort_by(|a, b| {
        a.age_months
            .cmp(&b.age_months)
            .then_with(|| a.vaccine.to_lowercase().cmp(&b.vaccine.to_lowercase()))
    });

    let mut groups: Vec<DoseGroup> = Vec::new();
    for dose in sorted {
        match groups.last_mut() {
            Some(group) if group.age_months == dose.age_months => group.doses.push(dose),
            _ => groups.push(DoseGroup {
                age_months: dose.age_months,
                title: dose.age_label,
                doses: vec![dose],
            }),
        }
    }
    groups
});

pub fn growth_visits() -> &'static [GrowthVisitDefinition] {
    GROWTH_VISITS
}

pub fn growth_checkpoints() -> &'static [GrowthCheckpoint] {
    GROWTH_CHECKPOINTS
}

pub fn vaccine_doses() -> &'static [VaccineDoseDefinition] {
    VACCINE_DOSES
}

pub fn find_growth_visit(id: &str) -> Option<&'static GrowthVisitDefinition> {
    GROWTH_VISITS.iter().find(|visit| visit.id == id)
}

pub fn find_growth_checkpoint(id: &str) -> Option<&'static GrowthCheckpoint> {
    GROWTH_CHECKPOINTS.iter().find(|checkpoint| checkpoint.id == id)
}

pub fn find_vaccine_dose(id: &str) -> Option<&'static VaccineDoseDefinition> {
    VACCINE_DOSES.iter().find(|dose| dose.id == id)
}
