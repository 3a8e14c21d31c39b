/// Inline style for a CSS background image
pub fn background_image_style(url: &str) -> String {
    format!("background-image: url('{}');", url)
}
