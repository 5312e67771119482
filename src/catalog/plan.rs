//! Built-in transition plan: the target curriculum and the legacy-code
//! equivalency table from the transition agreement.
//!
//! The `ELECTIVO_*` codes are synthetic elective slots: catalog entries
//! that absorb one or more legacy electives for credit accounting. They
//! are ordinary courses here, nothing downstream special-cases them.

use std::collections::BTreeMap;

use super::schema::{CatalogCourse, CourseCategory};
use super::Catalog;

/// Declared credit total of the transition agreement. Kept as authored
/// data: the plan's raw credit sum can exceed it where slot weights
/// overlap, which is why progress percentages are clamped.
const TOTAL_CREDITS: u32 = 156;

pub fn builtin() -> Catalog {
    Catalog {
        total_credits: TOTAL_CREDITS,
        courses: builtin_courses(),
        equivalencies: builtin_equivalencies(),
    }
}

fn mandatory(term: u32, code: &str, name: &str) -> CatalogCourse {
    CatalogCourse {
        code: code.to_string(),
        name: name.to_string(),
        credits: 3,
        term,
        category: CourseCategory::Mandatory,
        prerequisites: Vec::new(),
    }
}

fn elective(term: u32, code: &str, name: &str, category: CourseCategory) -> CatalogCourse {
    CatalogCourse {
        category,
        ..mandatory(term, code, name)
    }
}

fn requires(mut course: CatalogCourse, prerequisites: &[&str]) -> CatalogCourse {
    course.prerequisites = prerequisites.iter().map(|c| c.to_string()).collect();
    course
}

fn builtin_courses() -> Vec<CatalogCourse> {
    use CourseCategory::{ElectiveA, ElectiveB, ElectiveC};

    vec![
        // Term 1
        mandatory(1, "502707680", "Introducción a la Licenciatura"),
        mandatory(1, "514519", "Lectura y escritura académicas"),
        mandatory(1, "80017", "Cátedra Unadista"),
        mandatory(1, "200610", "Herramientas Digitales"),
        mandatory(1, "40003", "Competencias Comunicativas"),
        mandatory(1, "40002", "Ética y ciudadanía"),
        // Term 2
        mandatory(2, "514517", "Infancia: historias y perspectivas"),
        mandatory(2, "520027", "Epistemología e historia de la pedagogía"),
        mandatory(2, "150001", "Fundamentos de investigación"),
        mandatory(2, "517022", "Teorías del aprendizaje"),
        mandatory(2, "517031", "Matemáticas para la resolución de problemas"),
        mandatory(2, "520025", "Ética de la profesión docente"),
        // Term 3
        mandatory(3, "514502", "Políticas y programas de atención"),
        mandatory(3, "517020", "Didáctica"),
        mandatory(3, "517021", "Enfoques curriculares"),
        mandatory(3, "517027", "Educación para la transformación social"),
        mandatory(3, "514006", "Salud y desarrollo infantil"),
        mandatory(3, "502707681", "Educación infantil en perspectiva de género"),
        // Term 4
        mandatory(4, "514505", "Desarrollo socioafectivo y moral"),
        mandatory(4, "514017", "Pedagogía y didácticas para la inclusión"),
        requires(
            mandatory(4, "517023", "Investigación educativa y pedagógica"),
            &["150001"],
        ),
        mandatory(4, "514506", "Educación, familia y comunidad"),
        mandatory(4, "520026", "Evaluación"),
        mandatory(4, "900001", "Inglés A1"),
        // Term 5
        mandatory(5, "514515", "Juego, lúdica y psicomotricidad"),
        mandatory(5, "502707682", "Exploración del medio en la infancia"),
        requires(
            mandatory(5, "514507", "Investigación en educación infantil"),
            &["517023"],
        ),
        requires(
            mandatory(5, "502707683", "Maestros, infancias y contextos"),
            &["517020", "517023", "520026", "517027", "514502", "514006"],
        ),
        mandatory(5, "517028", "Escenarios educativos inclusivos"),
        requires(mandatory(5, "900002", "Inglés A2"), &["900001"]),
        // Term 6
        mandatory(6, "514516", "Construcción de la lengua escrita"),
        mandatory(6, "514003", "Arte y educación artística"),
        mandatory(6, "517018", "Prácticas educativas mediadas por TIC"),
        requires(
            mandatory(6, "502707684", "Maestro innovador reflexivo"),
            &["502707683"],
        ),
        elective(6, "ELECTIVO_DE_1", "Electivo disciplinar 1", ElectiveB),
        requires(mandatory(6, "900003", "Inglés B1"), &["900002"]),
        // Term 7
        mandatory(7, "514501", "Literatura y oralidad en la infancia"),
        mandatory(7, "514005", "Desarrollo del pensamiento lógico-matemático"),
        mandatory(7, "500001", "Administración y gestión educativa"),
        requires(
            mandatory(7, "502707685", "Maestro investigador reflexivo"),
            &["502707684"],
        ),
        elective(7, "ELECTIVO_IBC_1", "Electivo IBC 1", ElectiveA),
        requires(mandatory(7, "900005", "Inglés B2"), &["900003"]),
        // Term 8
        requires(
            mandatory(8, "514511", "Bilingüismo en educación infantil"),
            &["900005"],
        ),
        mandatory(8, "514508", "Uso de las TIC en educación infantil"),
        requires(mandatory(8, "514512", "Gestión de proyectos"), &["500001"]),
        requires(
            mandatory(8, "502707686", "Maestro investigador transformativo"),
            &["502707685"],
        ),
        mandatory(8, "520024", "Legislación educativa"),
        elective(8, "ELECTIVO_DE_2", "Electivo disciplinar 2", ElectiveB),
        elective(8, "ELECTIVO_FC_1", "Electivo complementario 1", ElectiveC),
        // Term 9
        elective(9, "ELECTIVO_DE_3", "Electivo disciplinar 3", ElectiveB),
        elective(9, "ELECTIVO_IBC_2", "Electivo IBC 2", ElectiveA),
        elective(9, "ELECTIVO_FC_2", "Electivo complementario 2", ElectiveC),
        requires(
            mandatory(9, "502707687", "Cátedra de infancias"),
            &["502707686"],
        ),
        CatalogCourse {
            credits: 0,
            ..mandatory(9, "700004", "Prestación servicio social unadista")
        },
        elective(9, "ELECTIVO_FC_3", "Electivo complementario 3", ElectiveC),
    ]
}

/// Legacy code -> catalog code, including identity rows the agreement
/// lists explicitly and the many-to-one elective slot absorptions.
/// Every target must be a catalog course code; unresolvable rows would
/// pile up orphan reconciled entries no output ever reaches.
const EQUIVALENCY_PAIRS: [(&str, &str); 38] = [
    ("80017", "80017"),
    ("700004", "700004"),
    ("40003", "40003"),
    ("40002", "40002"),
    ("150001", "150001"),
    ("900001", "900001"),
    ("900002", "900002"),
    ("900003", "900003"),
    ("900005", "900005"),
    ("200610", "200610"),
    ("200611", "ELECTIVO_IBC_1"),
    ("112001", "ELECTIVO_IBC_2"),
    ("50004", "520027"),
    ("401302", "517022"),
    ("401305", "517020"),
    ("401307", "517021"),
    ("50001", "520025"),
    ("50002", "517023"),
    ("50005", "500001"),
    ("401304", "520026"),
    ("50003", "517018"),
    ("514518", "502707680"),
    ("514519", "514519"),
    ("514517", "514517"),
    ("514006", "514006"),
    ("514505", "514505"),
    ("514502", "514502"),
    ("514017", "514017"),
    ("514507", "514507"),
    ("514506", "514506"),
    ("514512", "514512"),
    ("514508", "514508"),
    ("514516", "514516"),
    ("514501", "514501"),
    ("514005", "502707682"),
    ("514515", "514515"),
    ("514003", "514003"),
    ("514503", "ELECTIVO_DE_1"),
];

fn builtin_equivalencies() -> BTreeMap<String, String> {
    EQUIVALENCY_PAIRS
        .iter()
        .map(|(legacy, target)| (legacy.to_string(), target.to_string()))
        .collect()
}
