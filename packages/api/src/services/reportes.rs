//! Report exports. The backend renders Excel/PDF; the client only picks the
//! report, the format (through `Accept`) and an optional date range, and
//! hands the bytes to the browser as a download.

use crate::{ApiClient, ApiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Inventario,
    Entradas,
    Salidas,
    Alertas,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Inventario,
        ReportKind::Entradas,
        ReportKind::Salidas,
        ReportKind::Alertas,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::Inventario => "inventario",
            ReportKind::Entradas => "entradas",
            ReportKind::Salidas => "salidas",
            ReportKind::Alertas => "alertas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Inventario => "Inventario",
            ReportKind::Entradas => "Entradas",
            ReportKind::Salidas => "Salidas",
            ReportKind::Alertas => "Alertas",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    /// The stock snapshot has no meaningful date range.
    pub fn accepts_range(self) -> bool {
        self != ReportKind::Inventario
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Excel,
    Pdf,
}

impl ReportFormat {
    pub fn slug(self) -> &'static str {
        match self {
            ReportFormat::Excel => "excel",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ReportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ReportFormat::Pdf => "application/pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Excel => "xlsx",
            ReportFormat::Pdf => "pdf",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "excel" => Some(ReportFormat::Excel),
            "pdf" => Some(ReportFormat::Pdf),
            _ => None,
        }
    }
}

/// Inclusive `YYYY-MM-DD` date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub desde: String,
    pub hasta: String,
}

impl DateRange {
    pub fn validate(&self) -> Result<()> {
        if !is_iso_date(&self.desde) || !is_iso_date(&self.hasta) {
            return Err(ApiError::Validation("dates must be YYYY-MM-DD".to_string()));
        }
        // ISO dates order lexicographically.
        if self.desde > self.hasta {
            return Err(ApiError::Validation(
                "start date must not be after end date".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// A downloaded export.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    pub async fn export_report(
        &self,
        kind: ReportKind,
        format: ReportFormat,
        range: Option<&DateRange>,
    ) -> Result<ReportFile> {
        let mut query = Vec::new();
        if let Some(range) = range.filter(|_| kind.accepts_range()) {
            range.validate()?;
            query.push(("desde", range.desde.clone()));
            query.push(("hasta", range.hasta.clone()));
        }

        let path = format!("/reportes/{}/{}", kind.slug(), format.slug());
        let bytes = self
            .get_bytes(&path, &query, format.mime(), "Could not generate report")
            .await?;
        tracing::info!("exported {} report ({} bytes)", kind.slug(), bytes.len());

        let filename = match range.filter(|_| kind.accepts_range()) {
            Some(r) => format!("reporte_{}_{}_{}.{}", kind.slug(), r.desde, r.hasta, format.extension()),
            None => format!("reporte_{}.{}", kind.slug(), format.extension()),
        };
        Ok(ReportFile {
            filename,
            mime: format.mime(),
            bytes,
        })
    }
}
