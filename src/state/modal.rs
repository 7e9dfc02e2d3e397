use crate::state::pricing::Plan;

/// Purchase modal: open/closed plus the plan preselected inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    open: bool,
    plan: Option<Plan>,
}

impl ModalState {
    /// Opens without touching the plan selection (generic CTA path).
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Opens with `plan` preselected (pricing-card path).
    pub fn open_with(&mut self, plan: Plan) {
        self.open = true;
        self.plan = Some(plan);
    }

    /// Idempotent close; the plan selection survives reopening.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_plan(&mut self, plan: Plan) {
        self.plan = Some(plan);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn plan(&self) -> Option<Plan> {
        self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_is_idempotent() {
        let mut modal = ModalState::default();
        modal.close();
        assert!(!modal.is_open());
        modal.open();
        modal.close();
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn pricing_card_preselects_its_plan() {
        let mut modal = ModalState::default();
        modal.open_with(Plan::Enterprise);
        assert!(modal.is_open());
        assert_eq!(modal.plan(), Some(Plan::Enterprise));
    }

    #[test]
    fn generic_cta_leaves_plan_untouched() {
        let mut modal = ModalState::default();
        modal.open_with(Plan::Starter);
        modal.close();
        modal.open();
        assert_eq!(modal.plan(), Some(Plan::Starter));
    }
}
