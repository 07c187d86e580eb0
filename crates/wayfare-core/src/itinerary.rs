// crates/wayfare-core/src/itinerary.rs

//! Day-by-day activity plan for the dashboard.
//!
//! Randomness is injected: [`Itinerary::suggest`] takes any [`rand::Rng`], so
//! a seeded generator gives reproducible suggestions.

use crate::error::{Result, WayfareError};
use crate::model::{Activity, Catalog};
use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Time slot given to activities added without an explicit time.
pub const DEFAULT_SLOT: &str = "12:00 PM";

/// How many unplanned activities the "quick add" strip shows.
pub const QUICK_ADD_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: String,
    pub activity_id: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub items: Vec<ItineraryItem>,
    /// Next item number; never reused, even after removals.
    next_item: u32,
}

impl DayPlan {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            items: Vec::new(),
            next_item: 1,
        }
    }

    /// e.g. `Thu, Oct 16`.
    pub fn date_label(&self) -> String {
        self.date.format("%a, %b %-d").to_string()
    }

    pub fn contains(&self, activity_id: &str) -> bool {
        self.items.iter().any(|i| i.activity_id == activity_id)
    }

    /// Append an item; `day` is this plan's zero-based index in the itinerary.
    fn push(&mut self, day: usize, activity_id: &str, time: &str) -> &ItineraryItem {
        self.items.push(ItineraryItem {
            id: format!("day{}-item{}", day + 1, self.next_item),
            activity_id: activity_id.to_owned(),
            time: time.to_owned(),
            notes: None,
        });
        self.next_item += 1;
        &self.items[self.items.len() - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    days: Vec<DayPlan>,
}

impl Itinerary {
    /// `days` empty day plans starting at `start`.
    pub fn new(start: NaiveDate, days: usize) -> Self {
        let days = (0..days)
            .map(|offset| {
                let date = start
                    .checked_add_days(Days::new(offset as u64))
                    .unwrap_or(NaiveDate::MAX);
                DayPlan::new(date)
            })
            .collect();
        Self { days }
    }

    /// The dashboard's starting plan: one Tokyo activity on each of the
    /// first three days.
    pub fn sample(start: NaiveDate, days: usize) -> Self {
        let mut plan = Self::new(start, days);
        let seeds = [
            ("sensoji", "09:00 AM"),
            ("tokyo-skytree", "11:00 AM"),
            ("shibuya-crossing", "04:00 PM"),
        ];
        for ((day, plan_day), (activity_id, time)) in
            plan.days.iter_mut().enumerate().zip(seeds)
        {
            plan_day.push(day, activity_id, time);
        }
        plan
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, day: usize) -> Result<&DayPlan> {
        self.days.get(day).ok_or(WayfareError::UnknownDay(day))
    }

    fn day_mut(&mut self, day: usize) -> Result<&mut DayPlan> {
        self.days.get_mut(day).ok_or(WayfareError::UnknownDay(day))
    }

    /// Append an activity to a day. Ids look like `day2-item3`.
    pub fn add_activity(
        &mut self,
        day: usize,
        activity_id: &str,
        time: &str,
    ) -> Result<&ItineraryItem> {
        Ok(self.day_mut(day)?.push(day, activity_id, time))
    }

    /// Remove an item by id. Returns whether anything was removed.
    pub fn remove(&mut self, day: usize, item_id: &str) -> Result<bool> {
        let plan = self.day_mut(day)?;
        let before = plan.items.len();
        plan.items.retain(|i| i.id != item_id);
        Ok(plan.items.len() != before)
    }

    /// Catalog activities not yet planned on `day`, in catalog order.
    pub fn available<'c>(
        &self,
        day: usize,
        catalog: &'c Catalog,
        limit: usize,
    ) -> Result<Vec<&'c Activity>> {
        let plan = self.day(day)?;
        Ok(catalog
            .activities()
            .iter()
            .filter(|a| !plan.contains(&a.id))
            .take(limit)
            .collect())
    }

    /// Pick a random activity not yet planned on `day`.
    pub fn suggest<'c, R: Rng + ?Sized>(
        &self,
        day: usize,
        catalog: &'c Catalog,
        rng: &mut R,
    ) -> Result<Option<&'c Activity>> {
        let candidates = self.available(day, catalog, usize::MAX)?;
        Ok(candidates.choose(rng).copied())
    }

    /// "Suggest activity": add a random unplanned activity at [`DEFAULT_SLOT`].
    pub fn add_suggested<R: Rng + ?Sized>(
        &mut self,
        day: usize,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<Option<ItineraryItem>> {
        let Some(activity) = self.suggest(day, catalog, rng)? else {
            return Ok(None);
        };
        let id = activity.id.clone();
        self.add_activity(day, &id, DEFAULT_SLOT).map(|item| Some(item.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::sample_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 10).unwrap()
    }

    #[test]
    fn sample_prepopulates_one_per_day() {
        let plan = Itinerary::sample(start(), 3);
        let ids: Vec<&str> = plan
            .days()
            .iter()
            .map(|d| d.items[0].activity_id.as_str())
            .collect();
        assert_eq!(ids, ["sensoji", "tokyo-skytree", "shibuya-crossing"]);
        assert_eq!(plan.days()[2].date, NaiveDate::from_ymd_opt(2025, 10, 12).unwrap());
        assert_eq!(plan.days()[0].date_label(), "Fri, Oct 10");
    }

    #[test]
    fn short_sample_skips_extra_seeds() {
        let plan = Itinerary::sample(start(), 2);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.days()[1].items.len(), 1);
        assert_eq!(plan.days()[1].items[0].id, "day2-item1");
    }

    #[test]
    fn long_sample_leaves_later_days_empty() {
        let mut plan = Itinerary::sample(start(), 5);
        assert!(plan.days()[3].items.is_empty() && plan.days()[4].items.is_empty());
        let id = plan.add_activity(2, "sensoji", DEFAULT_SLOT).unwrap().id.clone();
        assert_eq!(id, "day3-item2");
    }

    #[test]
    fn item_ids_are_not_reused_after_removal() {
        let mut plan = Itinerary::new(start(), 1);
        let first = plan.add_activity(0, "sensoji", "09:00 AM").unwrap().id.clone();
        assert!(plan.remove(0, &first).unwrap());
        let second = plan.add_activity(0, "tokyo-skytree", DEFAULT_SLOT).unwrap().id.clone();
        assert_eq!(first, "day1-item1");
        assert_eq!(second, "day1-item2");
        assert!(!plan.remove(0, "day1-item9").unwrap());
    }

    #[test]
    fn out_of_range_day_is_an_error() {
        let mut plan = Itinerary::new(start(), 2);
        assert!(matches!(
            plan.add_activity(5, "sensoji", DEFAULT_SLOT),
            Err(WayfareError::UnknownDay(5))
        ));
    }

    #[test]
    fn available_excludes_planned() {
        let catalog = sample_catalog();
        let plan = Itinerary::sample(start(), 3);
        let ids: Vec<&str> = plan
            .available(0, &catalog, QUICK_ADD_LIMIT)
            .unwrap()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, ["tokyo-skytree", "shibuya-crossing"]);
    }

    #[test]
    fn suggestion_is_deterministic_under_seed() {
        let catalog = sample_catalog();
        let plan = Itinerary::new(start(), 1);
        let a = plan.suggest(0, &catalog, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = plan.suggest(0, &catalog, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.map(|x| &x.id), b.map(|x| &x.id));
    }

    #[test]
    fn suggestions_fill_the_day_then_stop() {
        let catalog = sample_catalog();
        let mut plan = Itinerary::sample(start(), 1);
        let mut rng = StdRng::seed_from_u64(42);

        while let Some(item) = plan.add_suggested(0, &catalog, &mut rng).unwrap() {
            assert_eq!(item.time, DEFAULT_SLOT);
        }

        let day = plan.day(0).unwrap();
        assert_eq!(day.items.len(), catalog.activities().len());
        for activity in catalog.activities() {
            assert_eq!(
                day.items.iter().filter(|i| i.activity_id == activity.id).count(),
                1
            );
        }
        assert!(plan.suggest(0, &catalog, &mut rng).unwrap().is_none());
    }
}
