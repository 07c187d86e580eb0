// crates/wayfare-core/src/context.rs

//! Session state shared by the screens: which view is active and what the
//! traveller told onboarding. Owned by the top-level controller and handed
//! to screens as `&TravelContext` or `&mut TravelContext`.

use crate::error::{Result, WayfareError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Onboarding,
    Dashboard,
    Details,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelInfo {
    pub destination: String,
    pub duration: String,
    pub traveling_with: String,
}

/// Partial update; `None` fields are left alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelInfoPatch {
    pub destination: Option<String>,
    pub duration: Option<String>,
    pub traveling_with: Option<String>,
}

/// Body of `POST /api/travel-preferences`.
///
/// Fields are loosely typed: strings are taken as-is and numbers are
/// stringified. Anything else counts as missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    #[serde(default, deserialize_with = "loose_text")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub traveling_with: Option<String>,
}

fn loose_text<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl TravelPreferences {
    /// All three fields present and non-empty, or [`WayfareError::MissingFields`].
    pub fn validate(&self) -> Result<TravelInfo> {
        fn field(v: &Option<String>) -> Result<String> {
            match v.as_deref() {
                Some(s) if !s.is_empty() => Ok(s.to_owned()),
                _ => Err(WayfareError::MissingFields),
            }
        }

        Ok(TravelInfo {
            destination: field(&self.destination)?,
            duration: field(&self.duration)?,
            traveling_with: field(&self.traveling_with)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TravelContext {
    view: View,
    info: TravelInfo,
}

impl TravelContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn info(&self) -> &TravelInfo {
        &self.info
    }

    pub fn update(&mut self, patch: TravelInfoPatch) {
        if let Some(destination) = patch.destination {
            self.info.destination = destination;
        }
        if let Some(duration) = patch.duration {
            self.info.duration = duration;
        }
        if let Some(traveling_with) = patch.traveling_with {
            self.info.traveling_with = traveling_with;
        }
    }

    /// Onboarding "Continue": store the answers and move to the dashboard.
    /// Incomplete answers leave the context untouched.
    pub fn complete_onboarding(&mut self, prefs: &TravelPreferences) -> Result<&TravelInfo> {
        self.info = prefs.validate()?;
        self.view = View::Dashboard;
        Ok(&self.info)
    }

    /// Party label for the dashboard header.
    pub fn traveling_with_label(&self) -> &str {
        if self.info.traveling_with.is_empty() {
            "Solo"
        } else {
            &self.info.traveling_with
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(json: &str) -> TravelPreferences {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn patch_overwrites_only_given_fields() {
        let mut ctx = TravelContext::new();
        ctx.update(TravelInfoPatch {
            destination: Some("Kyoto".into()),
            duration: Some("short".into()),
            ..Default::default()
        });
        ctx.update(TravelInfoPatch {
            duration: Some("long".into()),
            ..Default::default()
        });

        assert_eq!(ctx.info().destination, "Kyoto");
        assert_eq!(ctx.info().duration, "long");
        assert_eq!(ctx.traveling_with_label(), "Solo");
        assert_eq!(ctx.view(), View::Onboarding);
    }

    #[test]
    fn complete_preferences_validate() {
        let info = prefs(r#"{"destination":"Kyoto","duration":"short","travelingWith":"solo"}"#)
            .validate()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            serde_json::json!({"destination":"Kyoto","duration":"short","travelingWith":"solo"})
        );
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        for body in [
            r#"{"destination":"Kyoto"}"#,
            r#"{"destination":"Kyoto","duration":"","travelingWith":"solo"}"#,
            r#"{"destination":"Kyoto","duration":"short","travelingWith":null}"#,
            r#"{"destination":["Kyoto"],"duration":"short","travelingWith":"solo"}"#,
            r#"{}"#,
        ] {
            assert!(
                matches!(prefs(body).validate(), Err(WayfareError::MissingFields)),
                "{body}"
            );
        }
    }

    #[test]
    fn numeric_fields_are_accepted() {
        let info = prefs(r#"{"destination":"Bali","duration":7,"travelingWith":"family"}"#)
            .validate()
            .unwrap();
        assert_eq!(info.duration, "7");
    }

    #[test]
    fn onboarding_switches_view_only_when_valid() {
        let mut ctx = TravelContext::new();
        assert!(ctx.complete_onboarding(&prefs(r#"{"destination":"Rome"}"#)).is_err());
        assert_eq!(ctx.view(), View::Onboarding);
        assert_eq!(ctx.info(), &TravelInfo::default());

        ctx.complete_onboarding(&prefs(
            r#"{"destination":"Rome","duration":"week","travelingWith":"couple"}"#,
        ))
        .unwrap();
        assert_eq!(ctx.view(), View::Dashboard);
        assert_eq!(ctx.traveling_with_label(), "couple");
    }
}
