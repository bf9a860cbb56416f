use constcat::concat;

mod components;
mod pages;
mod variables;

pub use components::BASE_COMPONENTS;
pub use pages::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// everything the site needs in one sheet, so App only has to emit a single style tag
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Tahoma, 'Noto Sans Arabic', sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
r#"
/* Application shell */
.app {
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
  transition: background-color var(--transition-normal), color var(--transition-normal);
}

.page-main {
  padding-top: var(--header-height);
}

.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: var(--header-bg);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.logo-mark {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  overflow: hidden;
}

.theme-light .logo-mark {
  background-color: #FFFFFF;
  padding: var(--space-1);
}

.logo-mark img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.logo-title {
  display: block;
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--heading);
}

.logo-subtitle {
  display: block;
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.nav-links {
  display: flex;
  gap: var(--space-8);
}

.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  padding: var(--space-1) 0;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
}

.nav-link.active {
  border-bottom-color: var(--accent);
}

.nav-actions {
  display: flex;
  gap: var(--space-3);
  align-items: center;
}

.menu-btn {
  display: none;
  font-size: 1.5rem;
  color: var(--text-secondary);
}

.mobile-nav {
  display: none;
  flex-direction: column;
  gap: var(--space-1);
  padding: var(--space-2) var(--space-3) var(--space-3);
  border-top: 1px solid var(--border);
  background-color: var(--background);
}

.mobile-nav .nav-link {
  padding: var(--space-2) var(--space-3);
  border: none;
  border-radius: var(--radius-md);
}

.mobile-nav .nav-link.active {
  background-color: var(--border);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-btn {
    display: inline-flex;
  }

  .mobile-nav.open {
    display: flex;
  }
}

/* Footer */
.site-footer {
  background-color: var(--band);
  color: var(--text-inverse);
}

.theme-dark .site-footer {
  color: var(--sand);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: var(--space-8);
  padding: var(--space-12) 0;
}

.footer-grid h3 {
  font-size: 1.125rem;
  margin-bottom: var(--space-4);
}

.footer-grid p {
  font-size: 0.875rem;
  opacity: 0.8;
}

.footer-grid .social-link {
  background-color: rgba(255, 255, 255, 0.1);
  color: inherit;
}

.footer-bottom {
  border-top: 1px solid rgba(255, 255, 255, 0.2);
  padding: var(--space-8) 0;
  text-align: center;
  font-size: 0.875rem;
  opacity: 0.8;
}

/* Floating chat button */
.whatsapp-float {
  position: fixed;
  bottom: var(--space-6);
  inset-inline-end: var(--space-6);
  z-index: 50;
  width: 3.5rem;
  height: 3.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  background-color: var(--whatsapp);
  color: #FFFFFF;
  font-size: 1.5rem;
  box-shadow: var(--shadow-lg);
  transition: transform var(--transition-normal), background-color var(--transition-normal);
}

.whatsapp-float:hover {
  background-color: var(--whatsapp-dark);
  transform: scale(1.1);
}
"#,
    PAGE_STYLES
);
