use super::components::number_format::format_cop;
use super::date_utils::format_date;
use contracts::domain::common::DocumentStatus;

/// Tagged column kinds, each carrying a typed accessor into the row.
///
/// Replaces per-column render callbacks with a closed set the table renderer
/// can match exhaustively. `Actions` has no accessor: the table renderer
/// fills that cell with the row's action controls.
#[derive(Clone)]
pub enum ColumnKind<R> {
    Text(fn(&R) -> String),
    Money(fn(&R) -> f64),
    Date(fn(&R) -> String),
    Status(fn(&R) -> DocumentStatus),
    Actions,
}

#[derive(Clone)]
pub struct Column<R> {
    pub id: &'static str,
    pub header: &'static str,
    pub kind: ColumnKind<R>,
}

impl<R> Column<R> {
    pub fn text(id: &'static str, header: &'static str, accessor: fn(&R) -> String) -> Self {
        Self {
            id,
            header,
            kind: ColumnKind::Text(accessor),
        }
    }

    pub fn money(id: &'static str, header: &'static str, accessor: fn(&R) -> f64) -> Self {
        Self {
            id,
            header,
            kind: ColumnKind::Money(accessor),
        }
    }

    pub fn date(id: &'static str, header: &'static str, accessor: fn(&R) -> String) -> Self {
        Self {
            id,
            header,
            kind: ColumnKind::Date(accessor),
        }
    }

    pub fn status(
        id: &'static str,
        header: &'static str,
        accessor: fn(&R) -> DocumentStatus,
    ) -> Self {
        Self {
            id,
            header,
            kind: ColumnKind::Status(accessor),
        }
    }

    pub fn actions(id: &'static str, header: &'static str) -> Self {
        Self {
            id,
            header,
            kind: ColumnKind::Actions,
        }
    }

    /// Formatted cell text for data columns; `None` for the actions column.
    pub fn display(&self, row: &R) -> Option<String> {
        match &self.kind {
            ColumnKind::Text(accessor) => Some(accessor(row)),
            ColumnKind::Money(accessor) => Some(format_cop(accessor(row))),
            ColumnKind::Date(accessor) => Some(format_date(&accessor(row))),
            ColumnKind::Status(accessor) => Some(accessor(row).label().to_string()),
            ColumnKind::Actions => None,
        }
    }

    /// Money cells are right-aligned
    pub fn cell_class(&self) -> &'static str {
        match &self.kind {
            ColumnKind::Money(_) => "table__cell table__cell--money",
            _ => "table__cell",
        }
    }
}

/// Column ids must be unique within one table schema.
pub fn column_ids_unique<R>(columns: &[Column<R>]) -> bool {
    let mut seen = std::collections::HashSet::new();
    columns.iter().all(|c| seen.insert(c.id))
}

/// What the table body shows for the current data/loading combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    /// First load, nothing to show yet
    Skeleton,
    /// Loaded and genuinely empty
    Empty,
    /// Data rows; while a reload runs the previous rows stay visible
    Rows,
}

pub fn body_mode(row_count: usize, loading: bool) -> BodyMode {
    if row_count > 0 {
        BodyMode::Rows
    } else if loading {
        BodyMode::Skeleton
    } else {
        BodyMode::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        amount: f64,
        date: String,
        status: DocumentStatus,
    }

    fn sample() -> Row {
        Row {
            name: "Arriendo".into(),
            amount: 1_500_000.0,
            date: "2026-08-01".into(),
            status: DocumentStatus::Pending,
        }
    }

    #[test]
    fn test_money_column_formats_cop() {
        let col = Column::money("amount", "Monto", |r: &Row| r.amount);
        assert_eq!(col.display(&sample()).as_deref(), Some("$1,500,000"));
        // formatting twice yields the same string
        assert_eq!(col.display(&sample()), col.display(&sample()));
    }

    #[test]
    fn test_date_column_formats() {
        let col = Column::date("date", "Fecha", |r: &Row| r.date.clone());
        assert_eq!(col.display(&sample()).as_deref(), Some("01/08/2026"));
    }

    #[test]
    fn test_status_column_shows_label() {
        let col = Column::status("status", "Estado", |r: &Row| r.status.clone());
        assert_eq!(col.display(&sample()).as_deref(), Some("Pendiente"));
    }

    #[test]
    fn test_actions_column_has_no_text() {
        let col: Column<Row> = Column::actions("actions", "");
        assert_eq!(col.display(&sample()), None);
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let cols = vec![
            Column::text("name", "Nombre", |r: &Row| r.name.clone()),
            Column::money("name", "Monto", |r: &Row| r.amount),
        ];
        assert!(!column_ids_unique(&cols));
    }

    #[test]
    fn test_body_mode() {
        assert_eq!(body_mode(0, true), BodyMode::Skeleton);
        assert_eq!(body_mode(0, false), BodyMode::Empty);
        // previous rows stay visible during a reload
        assert_eq!(body_mode(10, true), BodyMode::Rows);
        assert_eq!(body_mode(10, false), BodyMode::Rows);
    }
}
