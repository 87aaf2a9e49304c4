use super::{
    repository::ConverterRepository,
    utils::{self, ConversionOutcome, PriceQuote, CURRENCY, PRICE_REFRESH_INTERVAL_MS},
};
use crate::{
    api::{ApiClient, ApiError, GoldRecordCreate, SpotPriceResponse},
    state::{auth, session},
    utils::timer::RefreshTimer,
};
use leptos::{ev::SubmitEvent, *};
use std::rc::Rc;

#[derive(Clone)]
pub struct ConverterViewModel {
    pub amount: RwSignal<String>,
    pub quote: RwSignal<Option<PriceQuote>>,
    pub price_error: RwSignal<Option<String>>,
    pub result: RwSignal<Option<String>>,
    pub fetch_action: Action<(), Result<SpotPriceResponse, ApiError>>,
    repository: ConverterRepository,
    set_auth: WriteSignal<auth::AuthState>,
}

impl ConverterViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = ConverterRepository::new_with_client(Rc::new(api));
        let (_auth, set_auth) = auth::use_auth();

        let amount = create_rw_signal(String::new());
        let quote = create_rw_signal(None::<PriceQuote>);
        let price_error = create_rw_signal(None::<String>);
        let result = create_rw_signal(None::<String>);

        let repo_for_fetch = repository.clone();
        let fetch_action = create_action(move |(): &()| {
            let repo = repo_for_fetch.clone();
            async move { repo.fetch_price().await }
        });

        create_effect(move |_| {
            if let Some(outcome) = fetch_action.value().get() {
                // A missing token means the session is gone; leave through
                // the login page like any 401.
                if matches!(&outcome, Err(err) if err.is_auth()) {
                    auth::logout(set_auth);
                }
                apply_fetch_result(outcome, quote, price_error);
            }
        });

        // One fetch on mount, then the interval. The handle lives in the
        // reactive scope, so navigating away cancels the loop.
        let timer = store_value(None::<RefreshTimer>);
        create_effect(move |_| {
            fetch_action.dispatch(());
            timer.set_value(Some(RefreshTimer::start(PRICE_REFRESH_INTERVAL_MS, move || {
                fetch_action.dispatch(());
            })));
        });
        on_cleanup(move || timer.set_value(None));

        Self {
            amount,
            quote,
            price_error,
            result,
            fetch_action,
            repository,
            set_auth,
        }
    }

    /// Converts on submit and kicks off the background save. The save
    /// never touches the displayed result; a failure is only logged.
    pub fn handle_convert(&self) -> impl Fn(SubmitEvent) {
        let amount = self.amount;
        let quote = self.quote;
        let result = self.result;
        let repository = self.repository.clone();
        let set_auth = self.set_auth;
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let price = quote.get_untracked().map(|q| q.price_per_gram);
            match utils::evaluate_conversion(&amount.get_untracked(), price) {
                ConversionOutcome::Invalid => {
                    result.set(Some(utils::AMOUNT_PROMPT.to_string()));
                }
                ConversionOutcome::Converted {
                    amount: parsed,
                    grams,
                    message,
                } => {
                    result.set(Some(message));
                    let Some(price_per_gram) = price else {
                        return;
                    };
                    match session::user_id() {
                        Some(user_id) => {
                            let repo = repository.clone();
                            let record = GoldRecordCreate {
                                currency: CURRENCY.to_string(),
                                gold_price_per_gram: price_per_gram,
                                amount_in_currency: parsed,
                                calculated_gold: grams,
                            };
                            spawn_local(async move {
                                if let Err(err) = repo.save_record(user_id, &record).await {
                                    log::error!("Error saving gold record: {}", err);
                                }
                            });
                        }
                        // The session disappeared between page load and the
                        // click; treat it like any other auth failure.
                        None => auth::logout(set_auth),
                    }
                }
            }
        }
    }
}

fn apply_fetch_result(
    outcome: Result<SpotPriceResponse, ApiError>,
    quote: RwSignal<Option<PriceQuote>>,
    price_error: RwSignal<Option<String>>,
) {
    match outcome {
        Ok(spot) => {
            quote.set(Some(PriceQuote::from_usd_per_ounce(spot.gold)));
            price_error.set(None);
        }
        Err(err) => {
            // A stale quote must not survive a failed refresh.
            quote.set(None);
            price_error.set(Some(format!("Error fetching data: {}", err)));
        }
    }
}

pub fn use_converter_view_model() -> ConverterViewModel {
    match use_context::<ConverterViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = ConverterViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_starts_without_a_quote() {
        with_runtime(|| {
            let vm = use_converter_view_model();
            assert!(vm.amount.get().is_empty());
            assert!(vm.quote.get().is_none());
            assert!(vm.price_error.get().is_none());
            assert!(vm.result.get().is_none());
        });
    }

    #[test]
    fn successful_fetch_replaces_the_quote_and_clears_the_error() {
        with_runtime(|| {
            let quote = create_rw_signal(None::<PriceQuote>);
            let price_error = create_rw_signal(Some("Error fetching data: old".to_string()));

            apply_fetch_result(Ok(SpotPriceResponse { gold: 2332.7625 }), quote, price_error);

            let held = quote.get().expect("quote should be set");
            assert!((held.price_per_gram - (2332.7625 / 31.1035) * 83.96).abs() < 1e-9);
            assert!(price_error.get().is_none());
        });
    }

    #[test]
    fn failed_fetch_discards_the_previous_quote() {
        with_runtime(|| {
            let quote = create_rw_signal(Some(PriceQuote::from_usd_per_ounce(2000.0)));
            let price_error = create_rw_signal(None::<String>);

            apply_fetch_result(
                Err(ApiError::request_failed("Request failed with status 502")),
                quote,
                price_error,
            );

            assert!(quote.get().is_none());
            assert_eq!(
                price_error.get().as_deref(),
                Some("Error fetching data: Request failed with status 502")
            );
        });
    }
}
