/// A food item with a name and a calorie count.
///
/// Both fields are stored verbatim: no validation is performed, so empty
/// names and zero or negative calorie counts are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FoodItem {
    name: String,
    calories: i32,
}

impl FoodItem {
    /// Create a food item with the given name and calorie count.
    pub fn new(name: impl Into<String>, calories: i32) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }

    /// The currently stored name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently stored calorie count.
    #[inline]
    pub fn calories(&self) -> i32 {
        self.calories
    }

    /// Replace the stored name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the stored calorie count.
    pub fn set_calories(&mut self, calories: i32) {
        self.calories = calories;
    }
}

impl std::fmt::Display for FoodItem {
    /// List-entry form, e.g. `Apple - 95 calories`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} calories", self.name, self.calories)
    }
}
