mod fragment_tests;
mod inquiry_tests;
mod landing_tests;
mod project_tests;
mod static_tests;
