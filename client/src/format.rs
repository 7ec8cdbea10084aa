//! 终端输出格式化

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::api::{ModuleInstanceRow, ModuleRatingRow, ProfessorRatingRow};

const LIST_HEADERS: [&str; 5] = ["Module Code", "Module Name", "Year", "Semester", "Taught by"];

fn stars(average: u32) -> String {
    "*".repeat(average as usize)
}

fn centered(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Center)
}

pub fn module_table(rows: &[ModuleInstanceRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(LIST_HEADERS.iter().map(centered));

    for row in rows {
        let taught_by = row
            .taught_by
            .iter()
            .map(|p| format!("{}, {}", p.professor_code, p.professor_name))
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            centered(&row.module_code),
            centered(&row.module_name),
            centered(row.year),
            centered(row.semester),
            centered(taught_by),
        ]);
    }

    table.to_string()
}

pub fn professor_ratings(rows: &[ProfessorRatingRow]) -> String {
    rows.iter()
        .map(|row| match row.average_rating {
            Some(avg) => format!(
                "The rating of Professor {} ({}) is {}",
                row.professor_name,
                row.professor_code,
                stars(avg)
            ),
            None => format!(
                "No ratings exist for Professor {} ({})",
                row.professor_name, row.professor_code
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn module_rating(row: &ModuleRatingRow) -> String {
    match row.average_rating {
        Some(avg) => format!(
            "The rating of Professor {} ({}) in module {} ({}) is {}",
            row.professor_name,
            row.professor_code,
            row.module_name,
            row.module_code,
            stars(avg)
        ),
        None => "Rating unavailable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TaughtBy;

    #[test]
    fn test_professor_ratings_lines() {
        let rows = vec![
            ProfessorRatingRow {
                professor_code: "RR".into(),
                professor_name: "Roy Ruddle".into(),
                average_rating: Some(3),
            },
            ProfessorRatingRow {
                professor_code: "JS".into(),
                professor_name: "John Stell".into(),
                average_rating: None,
            },
        ];

        assert_eq!(
            professor_ratings(&rows),
            "The rating of Professor Roy Ruddle (RR) is ***\n\
             No ratings exist for Professor John Stell (JS)"
        );
    }

    #[test]
    fn test_module_rating_line() {
        let mut row = ModuleRatingRow {
            professor_code: "RR".into(),
            professor_name: "Roy Ruddle".into(),
            module_code: "DV".into(),
            module_name: "Data Vis".into(),
            average_rating: Some(5),
        };
        assert_eq!(
            module_rating(&row),
            "The rating of Professor Roy Ruddle (RR) in module Data Vis (DV) is *****"
        );

        row.average_rating = None;
        assert_eq!(module_rating(&row), "Rating unavailable");
    }

    #[test]
    fn test_module_table_contains_professors() {
        let rows = vec![ModuleInstanceRow {
            module_code: "IV".into(),
            module_name: "Info Vis".into(),
            year: 2024,
            semester: 1,
            taught_by: vec![
                TaughtBy {
                    professor_code: "RR".into(),
                    professor_name: "Roy Ruddle".into(),
                },
                TaughtBy {
                    professor_code: "JS".into(),
                    professor_name: "John Stell".into(),
                },
            ],
        }];

        let rendered = module_table(&rows);
        for header in LIST_HEADERS {
            assert!(rendered.contains(header), "missing header {header}");
        }
        assert!(rendered.contains("RR, Roy Ruddle"));
        assert!(rendered.contains("JS, John Stell"));
        assert!(rendered.contains("2024"));
    }
}
