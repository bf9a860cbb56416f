pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid transparent;
  font-weight: 500;
  cursor: pointer;
  background: transparent;
  color: inherit;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  text-decoration: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--brand);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--brand-soft);
}

.btn-outline {
  border-color: var(--outline);
  color: var(--outline);
}

.btn-outline:hover {
  background-color: var(--outline);
  color: var(--surface-muted);
}

/* for buttons sitting on a colored band */
.btn-light {
  border-color: #FFFFFF;
  color: #FFFFFF;
}

.btn-light:hover {
  background-color: #FFFFFF;
  color: var(--clay);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card-hover:hover {
  transform: scale(1.03);
  box-shadow: var(--shadow-xl);
}

/* Form Elements */
.form-row {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-4);
}

.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface-muted);
  color: var(--text-primary);
  font: inherit;
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--accent);
  outline: none;
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

.form-error {
  color: var(--brand);
  font-size: 0.875rem;
  margin-bottom: var(--space-4);
}

/* Tags and progress bars */
.tag {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  font-size: 0.75rem;
  font-weight: 500;
  border-radius: var(--radius-full);
  background-color: var(--surface-muted);
  color: var(--accent);
}

.bar {
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--border);
  overflow: hidden;
}

.bar-fill {
  height: 100%;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, var(--brand), var(--brand-soft));
}

.bar-row {
  display: flex;
  justify-content: space-between;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
}

/* mirrored glyphs (arrows) in right-to-left layouts */
[dir="rtl"] .flip {
  display: inline-block;
  transform: scaleX(-1);
}
"#;
