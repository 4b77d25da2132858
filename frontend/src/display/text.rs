//! 界面文案
//!
//! 组件里出现的固定文字都从这里按语言取，避免同一页面混用两种语言。

use crate::config::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiText {
    LandingTagline,
    SignIn,
    SignOut,
    Refresh,
    OverviewLoadFailed,
    OverviewUnavailable,
    Retry,
    AvailableBalance,
    HideBalance,
    ShowBalance,
    ThisMonth,
    SavingsGoal,
    RecentTransactions,
    NoTransactions,
    ComingSoon,
    BackHome,
}

impl UiText {
    pub const ALL: &'static [UiText] = &[
        UiText::LandingTagline,
        UiText::SignIn,
        UiText::SignOut,
        UiText::Refresh,
        UiText::OverviewLoadFailed,
        UiText::OverviewUnavailable,
        UiText::Retry,
        UiText::AvailableBalance,
        UiText::HideBalance,
        UiText::ShowBalance,
        UiText::ThisMonth,
        UiText::SavingsGoal,
        UiText::RecentTransactions,
        UiText::NoTransactions,
        UiText::ComingSoon,
        UiText::BackHome,
    ];

    pub fn get(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (UiText::LandingTagline, Locale::Fr) => {
                "Suivez vos comptes, vos virements et votre épargne au même endroit."
            }
            (UiText::LandingTagline, Locale::En) => {
                "Track your accounts, transfers and savings in one place."
            }
            (UiText::SignIn, Locale::Fr) => "Se connecter",
            (UiText::SignIn, Locale::En) => "Sign in",
            (UiText::SignOut, Locale::Fr) => "Déconnexion",
            (UiText::SignOut, Locale::En) => "Sign out",
            (UiText::Refresh, Locale::Fr) => "Actualiser",
            (UiText::Refresh, Locale::En) => "Refresh",
            (UiText::OverviewLoadFailed, Locale::Fr) => "Impossible de charger vos comptes.",
            (UiText::OverviewLoadFailed, Locale::En) => "Unable to load your accounts.",
            (UiText::OverviewUnavailable, Locale::Fr) => {
                "Vos comptes sont indisponibles pour le moment."
            }
            (UiText::OverviewUnavailable, Locale::En) => "Your accounts are unavailable right now.",
            (UiText::Retry, Locale::Fr) => "Réessayer",
            (UiText::Retry, Locale::En) => "Retry",
            (UiText::AvailableBalance, Locale::Fr) => "Solde disponible",
            (UiText::AvailableBalance, Locale::En) => "Available balance",
            (UiText::HideBalance, Locale::Fr) => "Masquer le solde",
            (UiText::HideBalance, Locale::En) => "Hide balance",
            (UiText::ShowBalance, Locale::Fr) => "Afficher le solde",
            (UiText::ShowBalance, Locale::En) => "Show balance",
            (UiText::ThisMonth, Locale::Fr) => "ce mois-ci",
            (UiText::ThisMonth, Locale::En) => "this month",
            (UiText::SavingsGoal, Locale::Fr) => "Objectif d'épargne",
            (UiText::SavingsGoal, Locale::En) => "Savings goal",
            (UiText::RecentTransactions, Locale::Fr) => "Transactions récentes",
            (UiText::RecentTransactions, Locale::En) => "Recent transactions",
            (UiText::NoTransactions, Locale::Fr) => "Aucune transaction.",
            (UiText::NoTransactions, Locale::En) => "No transactions.",
            (UiText::ComingSoon, Locale::Fr) => "Cette section sera bientôt disponible.",
            (UiText::ComingSoon, Locale::En) => "This section is coming soon.",
            (UiText::BackHome, Locale::Fr) => "Retour à l'accueil",
            (UiText::BackHome, Locale::En) => "Back to home",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_text_exists_in_both_locales() {
        for text in UiText::ALL {
            let fr = text.get(Locale::Fr);
            let en = text.get(Locale::En);
            assert!(!fr.is_empty() && !en.is_empty(), "{text:?}");
            assert_ne!(fr, en, "{text:?} is not translated");
        }
    }

    #[test]
    fn default_locale_is_french() {
        assert_eq!(UiText::SignIn.get(Locale::default()), "Se connecter");
        assert_eq!(UiText::SignIn.get(Locale::En), "Sign in");
    }
}
