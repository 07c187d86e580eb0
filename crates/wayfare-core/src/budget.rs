// crates/wayfare-core/src/budget.rs

//! Trip budget card: a spending limit plus a list of categorized expenses.

use crate::error::{Result, WayfareError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Accommodation,
    Transport,
    Food,
    Activities,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::Accommodation,
        ExpenseCategory::Transport,
        ExpenseCategory::Food,
        ExpenseCategory::Activities,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Activities => "activities",
            ExpenseCategory::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown expense category `{s}`"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripBudget {
    pub destination: String,
    pub limit: f64,
    expenses: Vec<Expense>,
    next_id: u32,
}

impl TripBudget {
    pub fn new(destination: impl Into<String>, limit: f64) -> Self {
        Self {
            destination: destination.into(),
            limit,
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// The dashboard's Tokyo budget: $2,500 with $2,205 already planned.
    pub fn sample() -> Self {
        use ExpenseCategory::*;

        let mut budget = Self::new("Tokyo", 2500.0);
        for (name, amount, category) in [
            ("Hotel (5 nights)", 750.0, Accommodation),
            ("Flight tickets", 900.0, Transport),
            ("Local transportation", 150.0, Transport),
            ("Food & Dining", 350.0, Food),
            ("Tokyo Skytree", 25.0, Activities),
            ("Sensō-ji Temple Tour", 30.0, Activities),
        ] {
            budget.push(name.to_owned(), amount, category);
        }
        budget
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Negative once the budget is exceeded.
    pub fn remaining(&self) -> f64 {
        self.limit - self.total_spent()
    }

    /// Share of the limit already spent, unclamped. A non-positive limit
    /// reads as 0% with no spending and 100% otherwise.
    pub fn percent_spent(&self) -> f64 {
        let spent = self.total_spent();
        if self.limit <= 0.0 {
            return if spent > 0.0 { 100.0 } else { 0.0 };
        }
        spent / self.limit * 100.0
    }

    /// Fill level of the progress bar, within `0..=100`.
    pub fn bar_percent(&self) -> f64 {
        self.percent_spent().clamp(0.0, 100.0)
    }

    /// Per-category totals, in the order each category first appears.
    pub fn category_totals(&self) -> Vec<(ExpenseCategory, f64)> {
        let mut totals: Vec<(ExpenseCategory, f64)> = Vec::new();
        for expense in &self.expenses {
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, sum)) => *sum += expense.amount,
                None => totals.push((expense.category, expense.amount)),
            }
        }
        totals
    }

    /// Validate and append an expense typed into the form.
    ///
    /// The name must be non-blank and the amount a finite, non-negative number.
    pub fn add_expense(
        &mut self,
        name: &str,
        amount: &str,
        category: ExpenseCategory,
    ) -> Result<&Expense> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WayfareError::InvalidExpense("name is required".into()));
        }
        let amount: f64 = amount
            .trim()
            .parse()
            .map_err(|_| WayfareError::InvalidExpense(format!("`{}` is not a number", amount.trim())))?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(WayfareError::InvalidExpense(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }

        self.push(name.to_owned(), amount, category);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Returns whether an expense with `id` existed.
    pub fn remove_expense(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    fn push(&mut self, name: String, amount: f64, category: ExpenseCategory) {
        self.expenses.push(Expense {
            id: format!("exp{}", self.next_id),
            name,
            amount,
            category,
        });
        self.next_id += 1;
    }
}
