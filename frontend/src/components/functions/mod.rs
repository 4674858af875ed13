mod math_form;
mod points_form;

pub use math_form::MathFunctionForm;
pub use points_form::PointsFunctionForm;
