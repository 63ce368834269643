use sea_orm::DatabaseConnection;

use crate::{
    data::{reference::ReferenceDomainRegistry, sla_threshold::SlaThresholdRepository},
    error::AppError,
    model::{
        api::ExportDto,
        report::{ContextMap, MaterializedReport, RawReportRow},
    },
    report::{columns, export::ReportExporter, materialize::materialize_rows, sla},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    registry: &'a ReferenceDomainRegistry,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection, registry: &'a ReferenceDomainRegistry) -> Self {
        Self { db, registry }
    }

    /// Materializes a report: resolves the requested catalog columns against
    /// the raw rows and the supplied contexts.
    ///
    /// When the request includes elapsed-time columns, the SLA classifier
    /// runs first with a one-shot threshold snapshot, writing status fields
    /// the pass-through status columns then pick up.
    ///
    /// # Arguments
    /// - `column_ids`: Requested catalog column ids, in output order
    /// - `rows`: Raw report rows produced upstream, in output order
    /// - `user_context`, `case_context`: Precomputed lookup maps from the
    ///   collaborating services
    ///
    /// # Returns
    /// - `Ok(MaterializedReport)`: The resolved report
    /// - `Err(AppError)`: No valid columns, empty input, or database error
    pub async fn materialize(
        &self,
        column_ids: &[i32],
        mut rows: Vec<RawReportRow>,
        user_context: &ContextMap,
        case_context: &ContextMap,
    ) -> Result<MaterializedReport, AppError> {
        let specs = columns::select(column_ids);
        if specs.is_empty() {
            return Err(AppError::BadRequest(
                "No valid report columns requested".to_string(),
            ));
        }

        let rules = sla::active_rules(column_ids);
        if !rules.is_empty() {
            let threshold_types: Vec<i32> =
                rules.iter().map(|rule| rule.threshold_type).collect();
            let allowed_seconds = SlaThresholdRepository::new(self.db)
                .get_allowed_seconds(&threshold_types)
                .await?;
            sla::apply(&mut rows, &rules, &allowed_seconds);
        }

        let materialized = materialize_rows(
            self.db,
            self.registry,
            &rows,
            &specs,
            user_context,
            case_context,
        )
        .await?;

        Ok(MaterializedReport {
            columns: specs.iter().map(|spec| spec.name.to_string()).collect(),
            rows: materialized,
        })
    }

    /// Materializes a report and renders it through the export adapter.
    pub async fn export(
        &self,
        column_ids: &[i32],
        rows: Vec<RawReportRow>,
        user_context: &ContextMap,
        case_context: &ContextMap,
        exporter: &dyn ReportExporter,
    ) -> Result<ExportDto, AppError> {
        let report = self
            .materialize(column_ids, rows, user_context, case_context)
            .await?;

        let data = exporter.render(&report.columns, &report.rows);

        Ok(ExportDto {
            success: true,
            message: "Report generated".to_string(),
            format: exporter.format().to_string(),
            data,
        })
    }
}
