pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand palette */
  --brand: #8f1819;            /* Deep red, headings and primary actions */
  --brand-soft: #bd7b6a;       /* Dusty rose, hover states */
  --clay: #a76552;             /* Call-to-action bands */
  --taupe: #9c7860;            /* Secondary text and outlines */
  --sand: #d9cab1;             /* Page background */
  --charcoal: #2d2d2d;
  --ink: #1a1a1a;
  --whatsapp: #25D366;
  --whatsapp-dark: #128C7E;

  /* Background and Surface Colors */
  --background: var(--sand);
  --surface: #FFFFFF;
  --surface-muted: var(--sand);
  --header-bg: rgba(217, 202, 177, 0.9);
  --band: var(--clay);

  /* Text Colors */
  --text-primary: var(--charcoal);
  --text-secondary: var(--taupe);
  --text-inverse: #FFFFFF;
  --heading: var(--brand);
  --accent: var(--brand);
  --accent-hover: var(--brand-soft);

  /* Border Colors */
  --border: rgba(156, 120, 96, 0.2);
  --outline: var(--taupe);

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 25px 50px -12px rgba(0, 0, 0, 0.25);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Dark variant, selected by data-theme on <html> or the class on the app root */
[data-theme="dark"],
.theme-dark {
  --background: var(--ink);
  --surface: var(--charcoal);
  --surface-muted: var(--ink);
  --header-bg: rgba(26, 26, 26, 0.9);
  --band: var(--ink);

  --text-primary: var(--sand);
  --text-secondary: rgba(217, 202, 177, 0.8);
  --heading: var(--brand-soft);
  --accent: var(--brand-soft);
  --accent-hover: var(--brand);

  --border: rgba(217, 202, 177, 0.2);
  --outline: var(--sand);
}"#;
