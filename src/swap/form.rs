//! Per-chat swap form and its state machine.
//!
//! `Idle -> Loading -> Ready -> Submitting -> Ready | Idle`. Every transition
//! that touches a token or the amount re-derives `to_amount` before returning.

use log::{info, warn};

use crate::entity::{AppError, Side, SwapOrder, SwapOutcome, SwapRequest, Token};
use crate::feed::Catalog;
use crate::swap::rate::compute_to_amount;
use crate::utils::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// No catalog yet, or the form was reset after a swap
    #[default]
    Idle,
    /// Catalog fetch in flight
    Loading,
    /// Catalog loaded, accepting edits and submissions
    Ready,
    /// Swap execution in flight
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct SwapSession {
    phase: FormPhase,
    catalog: Catalog,
    request: SwapRequest,
    last_error: Option<String>,
}

impl SwapSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn request(&self) -> &SwapRequest {
        &self.request
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected(&self, side: Side) -> Option<&Token> {
        self.request.token(side).and_then(|id| self.catalog.get(id))
    }

    /// Tokens selectable on `side`: everything except the other side's pick.
    pub fn candidates(&self, side: Side) -> Vec<&Token> {
        let excluded = self.request.token(side.other());

        self.catalog
            .tokens()
            .iter()
            .filter(|token| Some(token.id.as_str()) != excluded)
            .collect()
    }

    pub fn begin_load(&mut self) -> Result<(), AppError> {
        match self.phase {
            FormPhase::Loading => Err(AppError::RefreshInProgress),
            FormPhase::Submitting => Err(AppError::SwapInProgress),
            FormPhase::Idle | FormPhase::Ready => {
                self.phase = FormPhase::Loading;
                self.last_error = None;
                Ok(())
            }
        }
    }

    /// Applies the result of a refresh started with [`begin_load`].
    ///
    /// A failed refresh keeps the last good catalog and records the error.
    ///
    /// [`begin_load`]: SwapSession::begin_load
    pub fn finish_load(&mut self, result: Result<Vec<Token>, AppError>) {
        match result {
            Ok(tokens) => {
                self.catalog = Catalog::new(tokens);
                self.last_error = None;
                self.reconcile_selection();
                info!("Catalog replaced with {} tokens", self.catalog.len());
            }
            Err(e) => {
                warn!("Catalog refresh failed, keeping previous catalog: {}", e);
                self.last_error = Some(e.to_string());
            }
        }

        self.phase = self.resting_phase();
        self.recompute();
    }

    pub fn select(&mut self, side: Side, query: &str) -> Result<(), AppError> {
        self.ensure_editable()?;

        let token_id = self
            .catalog
            .find(query)
            .map(|token| token.id.clone())
            .ok_or_else(|| AppError::validation(format!("Unknown token: {}", query.trim())))?;

        if self.request.token(side.other()) == Some(token_id.as_str()) {
            return Err(AppError::validation(format!(
                "{} is already selected on the {} side",
                token_id.to_uppercase(),
                side.other().label()
            )));
        }

        *self.request.token_slot(side) = Some(token_id);
        self.phase = FormPhase::Ready;
        self.recompute();
        Ok(())
    }

    /// Sets the from-amount; an invalid entry clears it and is reported.
    pub fn set_amount(&mut self, input: &str) -> Result<(), AppError> {
        self.ensure_editable()?;
        self.phase = FormPhase::Ready;

        match parse_amount(input) {
            Some(amount) if amount > 0.0 => {
                self.request.from_amount = Some(amount);
                self.recompute();
                Ok(())
            }
            _ => {
                self.request.from_amount = None;
                self.recompute();
                Err(AppError::validation("Amount must be a positive number"))
            }
        }
    }

    /// Exchanges the two sides; the old output becomes the new input.
    pub fn swap_sides(&mut self) -> Result<(), AppError> {
        self.ensure_editable()?;

        let request = &mut self.request;
        std::mem::swap(&mut request.from_token, &mut request.to_token);
        request.from_amount = Some(request.to_amount);

        if !self.catalog.is_empty() {
            self.phase = FormPhase::Ready;
        }
        self.recompute();
        Ok(())
    }

    /// Validates the request and enters `Submitting`.
    pub fn begin_submit(&mut self) -> Result<SwapOrder, AppError> {
        match self.phase {
            FormPhase::Submitting => return Err(AppError::SwapInProgress),
            FormPhase::Loading => return Err(AppError::RefreshInProgress),
            FormPhase::Idle if self.catalog.is_empty() => return Err(AppError::CatalogUnavailable),
            _ => {}
        }

        let from = self
            .selected(Side::From)
            .cloned()
            .ok_or_else(|| AppError::validation("Select a token to swap from"))?;
        let to = self
            .selected(Side::To)
            .cloned()
            .ok_or_else(|| AppError::validation("Select a token to swap to"))?;
        let from_amount = self
            .request
            .from_amount
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .ok_or_else(|| AppError::validation("Amount must be a positive number"))?;

        self.recompute();
        self.phase = FormPhase::Submitting;

        Ok(SwapOrder {
            from,
            to,
            from_amount,
            to_amount: self.request.to_amount,
        })
    }

    /// Leaves `Submitting`. Success clears the form, failure keeps it.
    pub fn finish_submit(&mut self, outcome: &SwapOutcome) {
        if outcome.is_success() {
            self.request = SwapRequest::cleared();
            self.phase = FormPhase::Idle;
        } else {
            self.phase = FormPhase::Ready;
        }
    }

    fn ensure_editable(&self) -> Result<(), AppError> {
        match self.phase {
            FormPhase::Submitting => Err(AppError::SwapInProgress),
            FormPhase::Loading => Err(AppError::RefreshInProgress),
            _ if self.catalog.is_empty() => Err(AppError::CatalogUnavailable),
            _ => Ok(()),
        }
    }

    fn resting_phase(&self) -> FormPhase {
        if self.catalog.is_empty() {
            FormPhase::Idle
        } else {
            FormPhase::Ready
        }
    }

    /// Drops selections the new catalog no longer has, then fills empty sides
    /// with the first two tokens.
    fn reconcile_selection(&mut self) {
        for side in [Side::From, Side::To] {
            let slot = self.request.token_slot(side);
            let still_listed = slot
                .as_deref()
                .map_or(true, |id| self.catalog.contains(id));
            if !still_listed {
                *slot = None;
            }
        }

        let tokens = self.catalog.tokens();
        if self.request.from_token.is_none() {
            self.request.from_token = tokens
                .iter()
                .find(|t| self.request.to_token.as_deref() != Some(t.id.as_str()))
                .map(|t| t.id.clone());
        }
        if self.request.to_token.is_none() && tokens.len() > 1 {
            self.request.to_token = tokens
                .iter()
                .skip(1)
                .chain(tokens.iter().take(1))
                .find(|t| self.request.from_token.as_deref() != Some(t.id.as_str()))
                .map(|t| t.id.clone());
        }
    }

    fn recompute(&mut self) {
        let to_amount = match (
            self.selected(Side::From),
            self.selected(Side::To),
            self.request.from_amount,
        ) {
            (Some(from), Some(to), Some(amount)) => compute_to_amount(from, to, amount),
            _ => 0.0,
        };

        self.request.to_amount = to_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::PriceRecord;
    use crate::feed::build_catalog;

    fn tokens() -> Vec<Token> {
        build_catalog(
            vec![
                PriceRecord::new("ETH", "2024-01-01", 2.0),
                PriceRecord::new("USDC", "2024-01-01", 4.0),
                PriceRecord::new("ATOM", "2024-01-01", 8.0),
            ],
            "https://icons.example",
        )
    }

    fn ready_session() -> SwapSession {
        let mut session = SwapSession::new();
        session.begin_load().expect("idle session can load");
        session.finish_load(Ok(tokens()));
        session
    }

    #[test]
    fn load_selects_first_two_tokens() {
        let session = ready_session();

        assert_eq!(session.phase(), FormPhase::Ready);
        assert_eq!(session.request().from_token.as_deref(), Some("eth"));
        assert_eq!(session.request().to_token.as_deref(), Some("usdc"));
        assert_eq!(session.request().to_amount, 0.5);
    }

    #[test]
    fn overlapping_refresh_is_rejected() {
        let mut session = SwapSession::new();
        session.begin_load().expect("first refresh starts");

        assert_eq!(session.begin_load(), Err(AppError::RefreshInProgress));
    }

    #[test]
    fn failed_refresh_keeps_previous_catalog() {
        let mut session = ready_session();
        session.begin_load().expect("ready session can refresh");
        session.finish_load(Err(AppError::Fetch("HTTP error! status: 500".into())));

        assert_eq!(session.catalog().len(), 3);
        assert_eq!(session.phase(), FormPhase::Ready);
        assert_eq!(session.last_error(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn failed_first_load_returns_to_idle() {
        let mut session = SwapSession::new();
        session.begin_load().expect("idle session can load");
        session.finish_load(Err(AppError::Fetch("offline".into())));

        assert_eq!(session.phase(), FormPhase::Idle);
        assert!(session.catalog().is_empty());
        assert_eq!(session.set_amount("1"), Err(AppError::CatalogUnavailable));
    }

    #[test]
    fn refresh_drops_vanished_selection() {
        let mut session = ready_session();
        session.select(Side::To, "atom").expect("atom is selectable");

        session.begin_load().expect("refresh starts");
        session.finish_load(Ok(tokens().into_iter().take(2).collect()));

        assert_eq!(session.request().to_token.as_deref(), Some("usdc"));
    }

    #[test]
    fn candidates_exclude_other_side() {
        let session = ready_session();

        let from_ids: Vec<&str> = session
            .candidates(Side::From)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        let to_ids: Vec<&str> = session
            .candidates(Side::To)
            .iter()
            .map(|t| t.id.as_str())
            .collect();

        assert_eq!(from_ids, vec!["eth", "atom"]);
        assert_eq!(to_ids, vec!["usdc", "atom"]);
    }

    #[test]
    fn selecting_other_sides_token_is_rejected() {
        let mut session = ready_session();

        let result = session.select(Side::From, "USDC");

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(session.request().from_token.as_deref(), Some("eth"));
        assert_ne!(session.request().from_token, session.request().to_token);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let mut session = ready_session();

        assert!(matches!(
            session.select(Side::To, "doge"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn selection_recomputes_amount() {
        let mut session = ready_session();
        session.set_amount("10").expect("valid amount");
        session.select(Side::To, "atom").expect("atom is selectable");

        assert_eq!(session.request().to_amount, 2.5);
    }

    #[test]
    fn invalid_amount_clears_output() {
        let mut session = ready_session();

        assert!(session.set_amount("abc").is_err());
        assert_eq!(session.request().from_amount, None);
        assert_eq!(session.request().to_amount, 0.0);

        assert!(session.set_amount("0").is_err());
        assert_eq!(session.request().to_amount, 0.0);
    }

    #[test]
    fn swap_sides_moves_output_into_input() {
        let mut session = ready_session();
        session.set_amount("10").expect("valid amount");

        session.swap_sides().expect("sides swap");

        assert_eq!(session.request().from_token.as_deref(), Some("usdc"));
        assert_eq!(session.request().to_token.as_deref(), Some("eth"));
        assert_eq!(session.request().from_amount, Some(5.0));
        assert_eq!(session.request().to_amount, 10.0);
    }

    #[test]
    fn swapping_twice_restores_the_pair() {
        let mut session = ready_session();
        session.set_amount("3.3").expect("valid amount");
        let before = session.request().clone();

        session.swap_sides().expect("first swap");
        session.swap_sides().expect("second swap");

        assert_eq!(session.request().from_token, before.from_token);
        assert_eq!(session.request().to_token, before.to_token);
    }

    #[test]
    fn submit_rejects_reentry() {
        let mut session = ready_session();
        let order = session.begin_submit().expect("complete request submits");

        assert_eq!(order.from.id, "eth");
        assert_eq!(order.to_amount, 0.5);
        assert_eq!(session.phase(), FormPhase::Submitting);
        assert_eq!(session.begin_submit(), Err(AppError::SwapInProgress));
        assert_eq!(session.swap_sides(), Err(AppError::SwapInProgress));
        assert_eq!(session.begin_load(), Err(AppError::SwapInProgress));
    }

    #[test]
    fn submit_requires_positive_amount() {
        let mut session = ready_session();
        let _ = session.set_amount("-1");

        assert!(matches!(
            session.begin_submit(),
            Err(AppError::Validation(_))
        ));
        assert_eq!(session.phase(), FormPhase::Ready);
    }

    #[test]
    fn success_resets_form_and_failure_keeps_it() {
        let mut session = ready_session();
        session.begin_submit().expect("submits");
        session.finish_submit(&SwapOutcome::Failure {
            reason: "Transaction failed. Please try again.".into(),
        });

        assert_eq!(session.phase(), FormPhase::Ready);
        assert_eq!(session.request().from_token.as_deref(), Some("eth"));

        let order = session.begin_submit().expect("resubmits");
        session.finish_submit(&SwapOutcome::Success {
            from_amount: order.from_amount,
            to_amount: order.to_amount,
            from_symbol: order.from.symbol,
            to_symbol: order.to.symbol,
        });

        assert_eq!(session.phase(), FormPhase::Idle);
        assert_eq!(session.request(), &SwapRequest::cleared());
        assert_eq!(session.catalog().len(), 3);
    }

    #[test]
    fn editing_after_reset_returns_to_ready() {
        let mut session = ready_session();
        let order = session.begin_submit().expect("submits");
        session.finish_submit(&SwapOutcome::Success {
            from_amount: order.from_amount,
            to_amount: order.to_amount,
            from_symbol: order.from.symbol,
            to_symbol: order.to.symbol,
        });

        session.select(Side::From, "atom").expect("selectable after reset");

        assert_eq!(session.phase(), FormPhase::Ready);
    }
}
