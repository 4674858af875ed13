use serde::{Serialize, Deserialize};
use validator::Validate;

pub const MIN_POINTS: usize = 2;
pub const MAX_POINTS: usize = 1000;

/// One entry of the math-function catalog the service exposes
/// (`GET /api/v1/functions/tabulated/math-functions`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MathFunctionInfo {
    pub key: String,
    pub description: String,
}

/// Body of `POST /api/v1/functions/tabulated/by-points`.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CreateByPointsRequest {
    #[validate(custom(
        function = "crate::validation::validate_function_name",
        message = "Enter a valid function name"
    ))]
    pub name: String,
    #[serde(rename = "xValues")]
    pub x_values: Vec<f64>,
    #[serde(rename = "yValues")]
    pub y_values: Vec<f64>,
}

/// Body of `POST /api/v1/functions/tabulated/by-math-function`.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct CreateByMathRequest {
    #[validate(custom(
        function = "crate::validation::validate_function_name",
        message = "Enter a valid function name"
    ))]
    pub name: String,
    #[serde(rename = "mathFunctionType")]
    pub math_function_type: String,
    #[serde(rename = "fromX")]
    pub from_x: f64,
    #[serde(rename = "toX")]
    pub to_x: f64,
    #[serde(rename = "pointsCount")]
    pub points_count: usize,
}

/// Checks the point lists before they leave the browser: at least two points,
/// matching lengths, and strictly increasing X values.
pub fn validate_points(x_values: &[f64], y_values: &[f64]) -> Result<(), String> {
    if x_values.len() < MIN_POINTS || y_values.len() < MIN_POINTS {
        return Err(format!("Enter at least {} points for X and Y", MIN_POINTS));
    }
    if x_values.len() != y_values.len() {
        return Err("X and Y must have the same number of points".to_string());
    }
    for pair in x_values.windows(2) {
        if pair[1] <= pair[0] {
            return Err("X values must be strictly increasing".to_string());
        }
    }
    Ok(())
}

/// Checks the tabulation range and point count of a by-math-function request.
pub fn validate_range(from_x: f64, to_x: f64, points_count: usize) -> Result<(), String> {
    if !from_x.is_finite() || !to_x.is_finite() || from_x >= to_x {
        return Err("fromX must be less than toX".to_string());
    }
    if !(MIN_POINTS..=MAX_POINTS).contains(&points_count) {
        return Err(format!("Point count must be between {} and {}", MIN_POINTS, MAX_POINTS));
    }
    Ok(())
}

/// Parses a comma-separated list of numbers as typed in a form field.
/// Empty segments are skipped, anything non-numeric is an error.
pub fn parse_number_list(input: &str) -> Result<Vec<f64>, String> {
    let mut values = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => return Err(format!("\"{}\" is not a number", part)),
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_must_strictly_increase() {
        assert!(validate_points(&[1.0, 2.0, 3.0], &[0.0, 1.0, 4.0]).is_ok());
        assert!(validate_points(&[1.0, 1.0], &[0.0, 1.0]).is_err());
        assert!(validate_points(&[2.0, 1.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn points_require_matching_lengths_and_a_minimum() {
        assert!(validate_points(&[1.0], &[1.0]).is_err());
        assert!(validate_points(&[1.0, 2.0, 3.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn range_checks_order_and_count() {
        assert!(validate_range(0.0, 10.0, 100).is_ok());
        assert!(validate_range(10.0, 0.0, 100).is_err());
        assert!(validate_range(0.0, 0.0, 100).is_err());
        assert!(validate_range(0.0, 1.0, 1).is_err());
        assert!(validate_range(0.0, 1.0, 1001).is_err());
        assert!(validate_range(f64::NAN, 1.0, 10).is_err());
    }

    #[test]
    fn number_lists_parse_with_whitespace_and_trailing_commas() {
        assert_eq!(parse_number_list("1, 2.5 ,3,").unwrap(), vec![1.0, 2.5, 3.0]);
        assert!(parse_number_list("1, два, 3").is_err());
        assert!(parse_number_list("").unwrap().is_empty());
    }

    #[test]
    fn requests_serialize_with_the_service_field_names() {
        let req = CreateByMathRequest {
            name: "sin".to_string(),
            math_function_type: "SIN".to_string(),
            from_x: 0.0,
            to_x: 6.28,
            points_count: 100,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"mathFunctionType\""));
        assert!(json.contains("\"fromX\""));
        assert!(json.contains("\"pointsCount\""));
    }
}
