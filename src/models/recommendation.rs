use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Irrigation,
    Planting,
    DiseaseRisk,
    FruitTreeCare,
    CropSelection,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Irrigation => "Irrigation",
            RecommendationCategory::Planting => "Planting",
            RecommendationCategory::DiseaseRisk => "Plant Disease Risk",
            RecommendationCategory::FruitTreeCare => "Fruit Tree Care",
            RecommendationCategory::CropSelection => "Crop Selection",
        }
    }
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advice text for one category, recomputed on every evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub text: String,
}

impl Recommendation {
    pub fn new(category: RecommendationCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, self.text)
    }
}

/// Recommendations produced for one forecast day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayAdvice {
    pub date: Option<NaiveDate>,
    pub recommendations: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_titles() {
        assert_eq!(RecommendationCategory::Irrigation.as_str(), "Irrigation");
        assert_eq!(
            RecommendationCategory::DiseaseRisk.as_str(),
            "Plant Disease Risk"
        );
        assert_eq!(
            RecommendationCategory::FruitTreeCare.to_string(),
            "Fruit Tree Care"
        );
    }

    #[test]
    fn recommendation_display() {
        let rec = Recommendation::new(RecommendationCategory::Planting, "Plant peas.");
        assert_eq!(rec.to_string(), "Planting: Plant peas.");
    }
}
