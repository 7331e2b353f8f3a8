//! Statement generation: price every performance, then render text.

use serde::{Deserialize, Serialize};

use theater_core::{BillingError, BillingResult};

use crate::invoice::Invoice;
use crate::play::PlayCatalog;
use crate::pricing::quote;
use crate::schedule::FeeSchedule;
use crate::usd::usd;

/// Line terminator used for every statement line.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// One priced performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub play_name: String,
    pub audience: u32,
    /// Amount in cents.
    pub amount: u64,
    pub volume_credits: u64,
}

/// Fully priced invoice, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementData {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    pub total_amount: u64,
    pub total_volume_credits: u64,
}

impl StatementData {
    /// Price every performance in invoice order.
    ///
    /// Fails on the first unresolvable play or unpriceable type.
    pub fn build(
        invoice: &Invoice,
        plays: &PlayCatalog,
        schedule: &FeeSchedule,
    ) -> BillingResult<Self> {
        let span = tracing::info_span!(
            "statement",
            customer = invoice.customer(),
            performances = invoice.performances().len()
        );
        let _enter = span.enter();

        let result = Self::price_all(invoice, plays, schedule);
        match &result {
            Ok(data) => tracing::debug!(
                total_amount = data.total_amount,
                total_volume_credits = data.total_volume_credits,
                "statement priced"
            ),
            Err(e) => tracing::warn!("statement rejected: {e}"),
        }
        result
    }

    fn price_all(
        invoice: &Invoice,
        plays: &PlayCatalog,
        schedule: &FeeSchedule,
    ) -> BillingResult<Self> {
        schedule.validate()?;

        let mut lines = Vec::with_capacity(invoice.performances().len());
        let mut total_amount: u64 = 0;
        let mut total_volume_credits: u64 = 0;

        for performance in invoice.performances() {
            let play = plays.resolve(performance.play_id())?;
            let charge = quote(play, performance, schedule)?;
            tracing::debug!(
                play_id = %performance.play_id(),
                audience = performance.audience(),
                amount = charge.amount,
                volume_credits = charge.volume_credits,
                "performance priced"
            );

            total_amount = total_amount
                .checked_add(charge.amount)
                .ok_or_else(|| BillingError::overflow("statement total"))?;
            total_volume_credits = total_volume_credits
                .checked_add(charge.volume_credits)
                .ok_or_else(|| BillingError::overflow("statement volume credits"))?;

            lines.push(StatementLine {
                play_name: play.name().to_owned(),
                audience: performance.audience(),
                amount: charge.amount,
                volume_credits: charge.volume_credits,
            });
        }

        Ok(Self {
            customer: invoice.customer().to_owned(),
            lines,
            total_amount,
            total_volume_credits,
        })
    }

    /// Render the plain-text statement.
    ///
    /// Fails with `InvalidSchedule` when `percent_factor` is zero.
    pub fn render(&self, percent_factor: u64) -> BillingResult<String> {
        let mut result = format!("Statement for {}{LINE_SEPARATOR}", self.customer);
        for line in &self.lines {
            result.push_str(&format!(
                "  {}: {} ({} seats){LINE_SEPARATOR}",
                line.play_name,
                usd(line.amount, percent_factor)?,
                line.audience
            ));
        }
        result.push_str(&format!(
            "Amount owed is {}{LINE_SEPARATOR}",
            usd(self.total_amount, percent_factor)?
        ));
        result.push_str(&format!(
            "You earned {} credits{LINE_SEPARATOR}",
            self.total_volume_credits
        ));
        Ok(result)
    }
}

/// Generate the statement text with the default fee schedule.
pub fn statement(invoice: &Invoice, plays: &PlayCatalog) -> BillingResult<String> {
    statement_with_schedule(invoice, plays, &FeeSchedule::default())
}

/// Generate the statement text with an explicit fee schedule.
pub fn statement_with_schedule(
    invoice: &Invoice,
    plays: &PlayCatalog,
    schedule: &FeeSchedule,
) -> BillingResult<String> {
    let data = StatementData::build(invoice, plays, schedule)?;
    data.render(schedule.percent_factor)
}

/// Statement generator bound to one invoice and catalog.
#[derive(Debug, Clone, Copy)]
pub struct StatementPrinter<'a> {
    invoice: &'a Invoice,
    plays: &'a PlayCatalog,
    schedule: FeeSchedule,
}

impl<'a> StatementPrinter<'a> {
    pub fn new(invoice: &'a Invoice, plays: &'a PlayCatalog) -> Self {
        Self::with_schedule(invoice, plays, FeeSchedule::default())
    }

    pub fn with_schedule(
        invoice: &'a Invoice,
        plays: &'a PlayCatalog,
        schedule: FeeSchedule,
    ) -> Self {
        Self {
            invoice,
            plays,
            schedule,
        }
    }

    pub fn invoice(&self) -> &'a Invoice {
        self.invoice
    }

    pub fn plays(&self) -> &'a PlayCatalog {
        self.plays
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Priced lines and totals without rendering.
    pub fn data(&self) -> BillingResult<StatementData> {
        StatementData::build(self.invoice, self.plays, &self.schedule)
    }

    /// Formatted statement text.
    ///
    /// Fails with `UnknownPlayType` if one of the play types is not known.
    pub fn statement(&self) -> BillingResult<String> {
        statement_with_schedule(self.invoice, self.plays, &self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::Performance;
    use crate::play::Play;
    use theater_core::PlayId;

    fn catalog() -> PlayCatalog {
        [
            (PlayId::new("hamlet"), Play::new("Hamlet", "tragedy")),
            (PlayId::new("as-like"), Play::new("As You Like It", "comedy")),
            (PlayId::new("othello"), Play::new("Othello", "tragedy")),
            (PlayId::new("henry-v"), Play::new("Henry V", "history")),
        ]
        .into_iter()
        .collect()
    }

    fn lines(text: &[&str]) -> String {
        text.iter().map(|l| format!("{l}{LINE_SEPARATOR}")).collect()
    }

    #[test]
    fn empty_invoice_renders_header_and_zero_totals() {
        let invoice = Invoice::new("Nobody", Vec::new());
        let text = statement(&invoice, &catalog()).unwrap();
        assert_eq!(
            text,
            lines(&[
                "Statement for Nobody",
                "Amount owed is $0.00",
                "You earned 0 credits",
            ])
        );
    }

    #[test]
    fn lines_follow_invoice_order() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("othello", 40),
                Performance::new("hamlet", 55),
            ],
        );
        let text = statement(&invoice, &catalog()).unwrap();
        assert_eq!(
            text,
            lines(&[
                "Statement for BigCo",
                "  Othello: $500.00 (40 seats)",
                "  Hamlet: $650.00 (55 seats)",
                "Amount owed is $1,150.00",
                "You earned 35 credits",
            ])
        );
    }

    #[test]
    fn unknown_play_type_produces_no_text() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("henry-v", 53),
            ],
        );
        let err = statement(&invoice, &catalog()).unwrap_err();
        assert_eq!(err, BillingError::UnknownPlayType("history".to_string()));
    }

    #[test]
    fn unknown_play_id_is_reported() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("macbeth", 10)]);
        let err = statement(&invoice, &catalog()).unwrap_err();
        assert_eq!(err, BillingError::UnknownPlay("macbeth".to_string()));
    }

    #[test]
    fn invalid_schedule_is_rejected_before_pricing() {
        let invoice = Invoice::new("Nobody", Vec::new());
        let schedule = FeeSchedule {
            percent_factor: 0,
            ..FeeSchedule::default()
        };
        let err = statement_with_schedule(&invoice, &catalog(), &schedule).unwrap_err();
        assert!(matches!(err, BillingError::InvalidSchedule(_)));
    }

    #[test]
    fn render_rejects_zero_percent_factor() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
        let data = StatementData::build(&invoice, &catalog(), &FeeSchedule::default()).unwrap();

        assert!(data.render(100).unwrap().contains("  Hamlet: $650.00 (55 seats)"));
        assert!(matches!(data.render(0), Err(BillingError::InvalidSchedule(_))));
    }

    #[test]
    fn printer_exposes_inputs_and_data() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("as-like", 35)]);
        let plays = catalog();
        let printer = StatementPrinter::new(&invoice, &plays);

        assert_eq!(printer.invoice().customer(), "BigCo");
        assert_eq!(printer.plays().len(), 4);
        assert_eq!(printer.schedule(), &FeeSchedule::default());

        let data = printer.data().unwrap();
        assert_eq!(data.lines.len(), 1);
        assert_eq!(data.lines[0].amount, 58_000);
        assert_eq!(data.total_volume_credits, 12);
        assert_eq!(printer.statement().unwrap(), data.render(100).unwrap());
    }

    #[test]
    fn custom_schedule_changes_pricing() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 10)]);
        let plays = catalog();
        let schedule = FeeSchedule {
            tragedy_base_amount: 45_000,
            ..FeeSchedule::default()
        };
        let text = StatementPrinter::with_schedule(&invoice, &plays, schedule)
            .statement()
            .unwrap();
        assert!(text.contains("  Hamlet: $450.00 (10 seats)"));
    }
}
