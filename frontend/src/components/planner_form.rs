use gloo_console::{error, info};
use trip_planner_lib::{trip_plan::TripPlan, trip_request::TripRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::api::{self, ApiError};

const FETCH_FAILED_MSG: &str = "Error fetching trip plan";

pub enum Msg {
    UpdateName(String),
    UpdateOrigin(String),
    UpdatePreferences(String),
    Submit(SubmitEvent),
    PlanReady(Result<TripPlan, ApiError>),
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub api_base_url: AttrValue,
}

/// Form state and its submit lifecycle, kept separate from the component so
/// the transitions test without a DOM.
#[derive(Debug, Default)]
struct PlannerState {
    name: String,
    origin: String,
    preferences: String,
    planning: bool,
    plan: Option<TripPlan>,
}

impl PlannerState {
    /// Starts a submission: sets the busy flag, clears the previous plan, and
    /// returns the request to send. Returns `None` while one is in flight.
    fn begin_submit(&mut self) -> Option<TripRequest> {
        if self.planning {
            return None;
        }

        self.planning = true;
        self.plan = None;

        Some(TripRequest::new(
            self.name.clone(),
            self.origin.clone(),
            self.preferences.clone(),
        ))
    }

    /// Completes a submission: clears the busy flag, stores the plan on
    /// success, and hands back the error (for reporting) on failure.
    fn finish(&mut self, result: Result<TripPlan, ApiError>) -> Option<ApiError> {
        self.planning = false;
        match result {
            Ok(plan) => {
                self.plan = Some(plan);
                None
            }
            Err(err) => Some(err),
        }
    }
}

pub struct TripPlannerForm {
    state: PlannerState,
}

impl Component for TripPlannerForm {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: PlannerState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(value) => self.state.name = value,
            Msg::UpdateOrigin(value) => self.state.origin = value,
            Msg::UpdatePreferences(value) => self.state.preferences = value,
            Msg::Submit(event) => {
                event.prevent_default();
                let Some(request) = self.state.begin_submit() else {
                    return false;
                };

                let base_url = ctx.props().api_base_url.to_string();
                info!(format!("Requesting trip plan from {}", request.origin_city));

                // Late responses to a torn-down view are dropped.
                let cb = ctx.link().callback(Msg::PlanReady);
                spawn_local(async move {
                    cb.emit(api::plan_trip(&base_url, &request).await);
                });
            }
            Msg::PlanReady(result) => {
                if let Some(err) = self.state.finish(result) {
                    error!(format!("Trip plan request failed: {err}"));
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(FETCH_FAILED_MSG);
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_name_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateName(input.value())
        });
        let on_origin_input = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateOrigin(input.value())
        });
        let on_preferences_input = link.callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdatePreferences(input.value())
        });
        let onsubmit = link.callback(Msg::Submit);

        html! {
            <div class="planner component-container">
                <h1>{"🌍 AI Travel Planner"}</h1>

                <form {onsubmit} class="planner-form">
                    <input
                        type="text"
                        placeholder="Your name"
                        value={self.state.name.clone()}
                        oninput={on_name_input}
                        required={true}
                    />
                    <input
                        type="text"
                        placeholder="Origin city"
                        value={self.state.origin.clone()}
                        oninput={on_origin_input}
                        required={true}
                    />
                    <textarea
                        placeholder="Travel preferences (e.g. rainy city trip in Europe)"
                        value={self.state.preferences.clone()}
                        oninput={on_preferences_input}
                        required={true}
                    />
                    <button type="submit" disabled={self.state.planning}>
                        { if self.state.planning { "Planning..." } else { "Plan my trip" } }
                    </button>
                </form>

                if let Some(plan) = &self.state.plan {
                    <div class="plan-panel">
                        <h2>{"✈️ Trip Plan"}</h2>
                        <p><strong>{"Destination: "}</strong>{plan.destination.clone()}</p>
                        <p><strong>{"Flight: "}</strong>{plan.flight_summary()}</p>
                        <p><strong>{"Hotel: "}</strong>{plan.hotel_summary()}</p>
                        <h3>{"🎯 Activities:"}</h3>
                        <ul>
                            { for plan.activities.iter().map(|activity| html! {
                                <li>{activity.clone()}</li>
                            }) }
                        </ul>
                    </div>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> PlannerState {
        PlannerState {
            name: "Ada".into(),
            origin: "Berlin".into(),
            preferences: "rainy city trip in Europe".into(),
            ..Default::default()
        }
    }

    fn lisbon_plan() -> TripPlan {
        TripPlan {
            destination: "Lisbon".into(),
            from_city: "Berlin".into(),
            arrival_time: "14:30".into(),
            hotel_name: "Hotel Alfa".into(),
            hotel_location: "Downtown".into(),
            activities: vec!["Tram 28".into(), "Belém Tower".into()],
            ..Default::default()
        }
    }

    #[test]
    fn submit_sets_busy_and_builds_request_from_fields() {
        let mut state = filled_state();

        let request = state.begin_submit().unwrap();

        assert!(state.planning);
        assert!(state.plan.is_none());
        assert_eq!(
            request,
            TripRequest::new(
                "Ada".into(),
                "Berlin".into(),
                "rainy city trip in Europe".into()
            )
        );
    }

    #[test]
    fn submit_while_busy_sends_nothing() {
        let mut state = filled_state();
        state.begin_submit().unwrap();

        assert!(state.begin_submit().is_none());
        assert!(state.planning);
    }

    #[test]
    fn success_stores_plan_and_clears_busy() {
        let mut state = filled_state();
        state.begin_submit().unwrap();

        let reported = state.finish(Ok(lisbon_plan()));

        assert!(reported.is_none());
        assert!(!state.planning);
        assert_eq!(state.plan, Some(lisbon_plan()));
    }

    #[test]
    fn failure_reports_once_keeps_fields_and_clears_busy() {
        let mut state = filled_state();
        state.begin_submit().unwrap();

        let reported = state.finish(Err(ApiError::Status(502)));

        assert!(matches!(reported, Some(ApiError::Status(502))));
        assert!(state.plan.is_none());
        assert!(!state.planning);
        assert_eq!(state.name, "Ada");
        assert_eq!(state.origin, "Berlin");
        assert_eq!(state.preferences, "rainy city trip in Europe");
    }

    #[test]
    fn resubmit_clears_previous_plan_and_stores_replacement() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.finish(Ok(lisbon_plan()));

        state.begin_submit().unwrap();
        assert!(state.plan.is_none());

        let second = TripPlan {
            destination: "Porto".into(),
            ..Default::default()
        };
        state.finish(Ok(second.clone()));

        assert_eq!(state.plan, Some(second));
    }
}
