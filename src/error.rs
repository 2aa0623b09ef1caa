/// Structural failures raised by the calculation engine. Each aborts the
/// whole calculation; the engine never returns a partially computed deal.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("unknown product: no catalog entry for {product} plan '{plan_id}'")]
    UnknownProduct { product: String, plan_id: String },
    #[error("invalid upline percentage: {detail}")]
    InvalidUplinePercentage { detail: String },
    #[error("invalid clawback guarantee window: {days} day(s)")]
    InvalidClawbackWindow { days: i64 },
}
