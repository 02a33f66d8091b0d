use anyhow::{Context, Result};
use csv::Writer;
use domain::{compliance_hint, RiskRecord};

pub struct RiskCsvExporter;

impl RiskCsvExporter {
    pub fn new() -> Self {
        Self
    }

    pub fn export(&self, records: &[RiskRecord]) -> Result<String> {
        let mut wtr = Writer::from_writer(vec![]);

        wtr.write_record([
            "ID",
            "Asset",
            "Threat",
            "Likelihood",
            "Impact",
            "Score",
            "Level",
            "Mitigation Hint",
        ])?;

        for record in records {
            wtr.write_record([
                record.id.to_string(),
                record.asset.clone(),
                record.threat.clone(),
                record.likelihood.to_string(),
                record.impact.to_string(),
                record.score.to_string(),
                record.level.to_string(),
                compliance_hint(record.level).to_string(),
            ])?;
        }

        let data = wtr
            .into_inner()
            .map_err(|e| anyhow::anyhow!("CSV writer error: {}", e))?;
        String::from_utf8(data).context("CSV output is not valid UTF-8")
    }
}

impl Default for RiskCsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::RiskLevel;

    #[test]
    fn test_csv_export_empty() {
        let exporter = RiskCsvExporter::new();
        let result = exporter.export(&[]).unwrap();

        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ID,Asset,Threat"));
    }

    #[test]
    fn test_csv_export_quotes_commas() {
        let record = RiskRecord {
            id: 3,
            asset: "Payroll, HR".to_string(),
            threat: "Insider".to_string(),
            likelihood: 2,
            impact: 3,
            score: 6,
            level: RiskLevel::Medium,
        };

        let result = RiskCsvExporter::new().export(&[record]).unwrap();
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            concat!(
                "3,\"Payroll, HR\",Insider,2,3,6,Medium,",
                "Plan mitigation within 6 months - Document in risk register"
            )
        );
    }
}
