use crate::card::is_valid_card_format;
use crate::clock::{Clock, SystemClock};
use crate::currency;
use crate::error::{PaymentError, Result};
use crate::fraud::is_suspicious_card;
use crate::gateway;
use crate::request::{PaymentRequest, PaymentResult};

/// Sequences request validation, fraud screening, currency
/// normalization and the gateway into one authorization decision.
///
/// Malformed requests come back as `Err` (caller misuse); fraud
/// rejections and gateway declines are ordinary `Ok` results a caller
/// branches on. The two channels never mix outside `bulk_process`.
pub struct PaymentProcessor {
    clock: Box<dyn Clock>,
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentProcessor {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Builds a processor with a pinned date source.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Runs the full authorization pipeline for one request.
    pub fn process_payment(&self, request: &PaymentRequest) -> Result<PaymentResult> {
        self.validate(request)?;

        if is_suspicious_card(&request.card_number) {
            return Ok(PaymentResult::rejected("Rejected: suspected fraud"));
        }

        // Recorded for bookkeeping only; the decision below ignores it.
        let settlement_currency = currency::normalize(&request.currency);
        log::debug!(
            "charging customer {}: {} {}",
            request.customer_id,
            request.amount,
            settlement_currency
        );

        let outcome = gateway::try_charge(&request.card_number, request.amount);
        match outcome.decline_reason {
            Some(reason) => Ok(PaymentResult::failed(reason.to_string())),
            None => Ok(PaymentResult::success()),
        }
    }

    /// Processes a batch in input order, one result per request.
    ///
    /// This is the only place hard input errors are caught: a malformed
    /// item becomes a REJECTED result carrying the error message, and
    /// the rest of the batch is unaffected. Never returns an error.
    pub fn bulk_process(&self, requests: &[PaymentRequest]) -> Vec<PaymentResult> {
        requests
            .iter()
            .map(|request| {
                self.process_payment(request).unwrap_or_else(|err| {
                    log::warn!(
                        "rejecting malformed request from customer {:?}: {err}",
                        request.customer_id
                    );
                    PaymentResult::rejected(err.to_string())
                })
            })
            .collect()
    }

    /// True when the card has not expired. A card expiring in the
    /// current month is still valid; month 0 or 13 never is.
    pub fn is_valid_expiry(&self, month: u32, year: i32) -> bool {
        if !(1..=12).contains(&month) {
            return false;
        }
        let (current_year, current_month) = self.clock.year_month();
        year > current_year || (year == current_year && month >= current_month)
    }

    fn validate(&self, request: &PaymentRequest) -> Result<()> {
        if request.amount <= 0 {
            return Err(PaymentError::NonPositiveAmount);
        }
        if !is_valid_card_format(&request.card_number) {
            return Err(PaymentError::InvalidCardFormat);
        }
        if !self.is_valid_expiry(request.expiry_month, request.expiry_year) {
            return Err(PaymentError::InvalidExpiryDate);
        }
        if request.currency.is_empty() {
            return Err(PaymentError::EmptyCurrency);
        }
        if request.customer_id.trim().is_empty() {
            return Err(PaymentError::BlankCustomerId);
        }
        Ok(())
    }
}
