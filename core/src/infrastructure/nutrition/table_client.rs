use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        ports::NutritionClient,
        value_objects::{CalorieTable, builtin_calorie_table},
    },
};

/// Answers lookups from an in-process calorie table. Unknown foods are an
/// error so the caller's default applies.
#[derive(Debug, Clone)]
pub struct TableNutritionClient {
    table: CalorieTable,
}

impl TableNutritionClient {
    pub fn new(table: CalorieTable) -> Self {
        Self { table }
    }
}

impl Default for TableNutritionClient {
    fn default() -> Self {
        Self::new(builtin_calorie_table())
    }
}

impl NutritionClient for TableNutritionClient {
    async fn calories_per_100g(&self, food_name: String) -> Result<f64, CoreError> {
        self.table.find(&food_name).ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_food_is_found() {
        let client = TableNutritionClient::default();
        assert_eq!(client.calories_per_100g("pizza".to_string()).await, Ok(266.0));
    }

    #[tokio::test]
    async fn unknown_food_is_not_found() {
        let client = TableNutritionClient::default();
        assert_eq!(
            client.calories_per_100g("durian".to_string()).await,
            Err(CoreError::NotFound)
        );
    }
}
