use crate::entities::risk::RiskRecord;
use crate::scoring::{self, Rating, RiskLevel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskRef {
    pub id: i64,
    pub asset: String,
    pub threat: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub likelihood: u8,
    pub impact: u8,
    pub level: RiskLevel,
    pub count: usize,
    pub risks: Vec<RiskRef>,
}

/// Likelihood x impact grid of stored risks.
///
/// Rows run from likelihood 5 down to 1 and columns from impact 1 up to 5, so
/// the most severe corner sits top-right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskMatrix {
    pub rows: Vec<Vec<HeatmapCell>>,
}

impl RiskMatrix {
    pub fn from_records(records: &[RiskRecord]) -> Self {
        let mut rows: Vec<Vec<HeatmapCell>> = Rating::all()
            .rev()
            .map(|l| {
                Rating::all()
                    .map(|i| HeatmapCell {
                        likelihood: l.value(),
                        impact: i.value(),
                        level: scoring::score(l, i).level,
                        count: 0,
                        risks: Vec::new(),
                    })
                    .collect()
            })
            .collect();

        for record in records {
            if let Some(cell) = Self::slot(&mut rows, record.likelihood, record.impact) {
                cell.count += 1;
                cell.risks.push(RiskRef {
                    id: record.id,
                    asset: record.asset.clone(),
                    threat: record.threat.clone(),
                });
            }
        }

        Self { rows }
    }

    pub fn cell(&self, likelihood: u8, impact: u8) -> Option<&HeatmapCell> {
        let (row, col) = Self::position(likelihood, impact)?;
        self.rows.get(row)?.get(col)
    }

    pub fn total(&self) -> usize {
        self.rows.iter().flatten().map(|c| c.count).sum()
    }

    fn slot(
        rows: &mut [Vec<HeatmapCell>],
        likelihood: u8,
        impact: u8,
    ) -> Option<&mut HeatmapCell> {
        let (row, col) = Self::position(likelihood, impact)?;
        rows.get_mut(row)?.get_mut(col)
    }

    fn position(likelihood: u8, impact: u8) -> Option<(usize, usize)> {
        let l = Rating::new(likelihood.into())?;
        let i = Rating::new(impact.into())?;
        Some((
            usize::from(Rating::MAX - l.value()),
            usize::from(i.value() - Rating::MIN),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, likelihood: u8, impact: u8) -> RiskRecord {
        let score = likelihood * impact;
        RiskRecord {
            id,
            asset: format!("asset-{}", id),
            threat: format!("threat-{}", id),
            likelihood,
            impact,
            score,
            level: scoring::band(score),
        }
    }

    #[test]
    fn test_empty_matrix_layout() {
        let matrix = RiskMatrix::from_records(&[]);
        assert_eq!(matrix.rows.len(), 5);
        assert!(matrix.rows.iter().all(|r| r.len() == 5));
        assert_eq!(matrix.total(), 0);

        let top_left = &matrix.rows[0][0];
        assert_eq!((top_left.likelihood, top_left.impact), (5, 1));
        let top_right = &matrix.rows[0][4];
        assert_eq!((top_right.likelihood, top_right.impact), (5, 5));
        assert_eq!(top_right.level, RiskLevel::Critical);
        let bottom_left = &matrix.rows[4][0];
        assert_eq!((bottom_left.likelihood, bottom_left.impact), (1, 1));
        assert_eq!(bottom_left.level, RiskLevel::Low);
    }

    #[test]
    fn test_counts_records_per_cell() {
        let records = vec![record(1, 3, 4), record(2, 3, 4), record(3, 5, 5)];
        let matrix = RiskMatrix::from_records(&records);

        let cell = matrix.cell(3, 4).unwrap();
        assert_eq!(cell.count, 2);
        assert_eq!(cell.level, RiskLevel::Medium);
        assert_eq!(
            cell.risks.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(matrix.cell(5, 5).unwrap().count, 1);
        assert_eq!(matrix.cell(1, 1).unwrap().count, 0);
        assert_eq!(matrix.total(), 3);
        assert!(matrix.cell(0, 3).is_none());
    }
}
