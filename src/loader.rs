use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::error::{Result, SiteError};

/// Where a section's JSON resource is in its single load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed,
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed)
    }

    /// Folds a fetch outcome, logging the failure under `what`
    pub fn from_result(result: Result<T>, what: &str) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => {
                log::error!("Could not load {}: {}", what, e);
                LoadState::Failed
            }
        }
    }
}

/// GET a same-origin JSON document. Non-2xx responses are errors.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let response = Request::get(path).send().await?;
    if !response.ok() {
        return Err(SiteError::HttpStatus {
            status: response.status(),
        });
    }
    let value = response.json::<T>().await?;
    Ok(value)
}

/// Fetches `path` once per distinct path and tracks the outcome
#[hook]
pub fn use_json_resource<T>(path: String, what: &'static str) -> UseStateHandle<LoadState<T>>
where
    T: DeserializeOwned + 'static,
{
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        use_effect_with(path, move |path| {
            let path = path.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::debug!("Fetching {}", path);
                let result = fetch_json::<T>(&path).await;
                state.set(LoadState::from_result(result, what));
            });
            || ()
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_ok() {
        let state = LoadState::from_result(Ok(vec![1, 2, 3]), "numbers");
        assert_eq!(state.loaded(), Some(&vec![1, 2, 3]));
        assert!(!state.is_failed());
    }

    #[test]
    fn test_from_result_err() {
        let state: LoadState<Vec<u8>> =
            LoadState::from_result(Err(SiteError::HttpStatus { status: 500 }), "numbers");
        assert!(state.is_failed());
        assert_eq!(state.loaded(), None);
    }

    #[test]
    fn test_loading_has_no_value() {
        let state: LoadState<String> = LoadState::Loading;
        assert_eq!(state.loaded(), None);
        assert!(!state.is_failed());
    }
}
