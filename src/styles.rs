//! Inline CSS written by the controller.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::notification::Severity;

/// Stylesheet appended to `<head>` once at mount: toast slide-in, the mobile
/// navigation drawer, and the decorative float/pulse/bounce loops.
pub const PAGE_CSS: &str = r"
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@media (max-width: 768px) {
    .nav-menu {
        position: fixed;
        top: 70px;
        left: -100%;
        width: 100%;
        height: calc(100vh - 70px);
        background: white;
        flex-direction: column;
        align-items: center;
        justify-content: flex-start;
        padding-top: 50px;
        transition: left 0.3s ease;
        box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
        z-index: 1000;
    }
    .nav-menu.active { left: 0; display: flex; }
    .nav-menu li { margin: 20px 0; }
    .nav-menu a { font-size: 18px; }
    .hamburger.active span:nth-child(1) { transform: rotate(45deg) translate(5px, 5px); }
    .hamburger.active span:nth-child(2) { opacity: 0; }
    .hamburger.active span:nth-child(3) { transform: rotate(-45deg) translate(7px, -6px); }
}

.floating-card { animation: float 3s ease-in-out infinite; }

@keyframes float {
    0%, 100% { transform: translateY(0px); }
    50% { transform: translateY(-10px); }
}

.hero-image img { animation: pulse 2s ease-in-out infinite; }

@keyframes pulse {
    0%, 100% { transform: scale(1); }
    50% { transform: scale(1.02); }
}

.feature-card:hover .feature-illustration { animation: bounce 0.5s ease; }

@keyframes bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-5px); }
}
";

/// Keyframes for hero particles, appended only when particles are enabled.
pub const PARTICLE_CSS: &str = r"
@keyframes float-particle {
    0% { transform: translateY(0px) rotate(0deg); opacity: 1; }
    100% { transform: translateY(-100px) rotate(360deg); opacity: 0; }
}
";

pub const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
     background: linear-gradient(135deg, #54D4C8 0%, #4BC8BC 100%); z-index: 10001; \
     transition: width 0.1s ease;";

pub const CLOSE_BUTTON_CSS: &str = "background: none; border: none; color: white; font-size: 18px; \
     cursor: pointer; padding: 0; width: 20px; height: 20px; display: flex; align-items: center; \
     justify-content: center;";

/// Inline style for a toast of the given severity, pinned top-right.
#[must_use]
pub fn notification_css(severity: Severity) -> String {
    format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 16px 20px; border-radius: 8px; box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2); \
         z-index: 10000; display: flex; align-items: center; gap: 15px; font-size: 14px; \
         font-weight: 500; animation: slideInRight 0.3s ease; max-width: 350px;",
        severity.color()
    )
}
