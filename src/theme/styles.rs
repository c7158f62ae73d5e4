//! Global CSS for the desktop shell.
//!
//! Clinical light aesthetic: white panels on a soft blue wash, blue for
//! primary actions, violet for export. The `@media print` block at the
//! end scopes printing to the card stage; the exact `@page` rule is
//! injected separately from the core's `page_style`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BLUES (branding, primary actions) */
  --blue-dark: #1e40af;
  --blue: #2563eb;
  --blue-soft: #60a5fa;
  --blue-pale: #dbeafe;

  /* VIOLET (export accent) */
  --violet: #7c3aed;
  --violet-dark: #6d28d9;

  /* SURFACES */
  --page-bg: #eef2ff;
  --panel-bg: #ffffff;
  --panel-border: #dbeafe;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --danger: #dc2626;
  --danger-soft: #fef2f2;

  /* Typography */
  --font-sans: 'Helvetica Neue', Helvetica, Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(135deg, #eff6ff, #eef2ff, #f5f3ff);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Shell Layout === */
.app-shell {
  max-width: 1160px;
  margin: 0 auto;
  padding: 1rem;
}

.layout {
  display: flex;
  gap: 1.25rem;
  align-items: flex-start;
}

.side-pane {
  width: 36%;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

/* === Header === */
.app-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.25rem;
  margin-bottom: 1.25rem;
  background: var(--panel-bg);
  border-radius: 0.75rem;
  box-shadow: 0 1px 3px rgba(30, 64, 175, 0.12);
}

.header-badge {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 2.5rem;
  width: 2.5rem;
  border-radius: 9999px;
  background: linear-gradient(90deg, var(--blue), var(--violet));
  color: #ffffff;
}

.header-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.header-subtitle {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Panels === */
.panel {
  background: var(--panel-bg);
  border: 1px solid var(--panel-border);
  border-radius: 0.75rem;
  box-shadow: 0 1px 3px rgba(30, 64, 175, 0.1);
  padding: 1.25rem;
}

.panel-title {
  font-size: 1.05rem;
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.panel-intro {
  text-align: center;
  margin-bottom: 1rem;
}

.panel-intro .panel-title {
  color: var(--blue-dark);
  font-size: 1.3rem;
  margin-bottom: 0.2rem;
}

.panel-subtitle {
  font-size: 0.85rem;
  color: var(--blue);
}

/* === Form === */
.form-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.9rem;
}

.form-field {
  display: flex;
  flex-direction: column;
}

.field-label {
  font-size: 0.85rem;
  font-weight: 500;
  color: var(--blue-dark);
  margin-bottom: 0.25rem;
}

.field-input {
  width: 100%;
  border: 1px solid var(--blue-pale);
  border-radius: 0.5rem;
  background: #ffffff;
  padding: 0.6rem 0.75rem;
  font-size: 0.9rem;
  color: var(--text-primary);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.field-input:focus {
  outline: none;
  border-color: var(--blue-soft);
  box-shadow: 0 0 0 3px rgba(96, 165, 250, 0.25);
}

.field-hint {
  margin-top: 0.25rem;
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Quadrant Grid === */
.quadrant-section {
  margin-top: 1rem;
}

.quadrant-title {
  font-size: 0.85rem;
  font-weight: 500;
  color: var(--blue-dark);
  margin-bottom: 0.5rem;
}

.quadrant-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.6rem;
}

.quadrant-cell {
  background: #ffffff;
  border: 1px solid var(--blue-pale);
  border-radius: 0.5rem;
  padding: 0.5rem;
  text-align: center;
}

.quadrant-label {
  display: block;
  font-size: 0.7rem;
  font-weight: 500;
  color: var(--blue-dark);
  margin-bottom: 0.3rem;
}

.quadrant-input {
  width: 100%;
  text-align: center;
  padding: 0.4rem 0.2rem;
  border: 1px solid var(--blue-pale);
  border-radius: 0.375rem;
  font-size: 0.85rem;
}

.quadrant-input:focus {
  outline: none;
  border-color: var(--blue-soft);
  box-shadow: 0 0 0 2px rgba(96, 165, 250, 0.25);
}

.quadrant-hint {
  margin-top: 0.5rem;
  font-size: 0.75rem;
  color: var(--blue);
  text-align: center;
}

/* === Buttons === */
.btn-primary, .btn-accent, .btn-danger, .btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  padding: 0.7rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid transparent;
  font-size: 0.9rem;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), box-shadow var(--transition-fast);
}

.btn-primary {
  background: linear-gradient(90deg, var(--blue), var(--blue-dark));
  color: #ffffff;
  box-shadow: 0 1px 2px rgba(30, 64, 175, 0.3);
}

.btn-primary:hover {
  box-shadow: 0 2px 6px rgba(30, 64, 175, 0.4);
}

.btn-accent {
  background: linear-gradient(90deg, var(--violet), var(--violet-dark));
  color: #ffffff;
  box-shadow: 0 1px 2px rgba(109, 40, 217, 0.3);
}

.btn-accent:hover {
  box-shadow: 0 2px 6px rgba(109, 40, 217, 0.4);
}

.btn-accent:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-danger {
  background: var(--danger-soft);
  border-color: #fecaca;
  color: var(--danger);
  width: auto;
}

.btn-danger:hover {
  background: #fee2e2;
}

.btn-ghost {
  background: transparent;
  border-color: var(--panel-border);
  color: var(--text-secondary);
  width: auto;
}

.btn-ghost:hover {
  background: var(--page-bg);
}

.form-footer {
  margin-top: 1.25rem;
  padding-top: 1rem;
  border-top: 1px solid var(--blue-pale);
  display: flex;
  justify-content: center;
}

/* === Completion Meter === */
.completion {
  margin-top: 1rem;
  padding: 0.75rem;
  background: #eff6ff;
  border: 1px solid var(--blue-pale);
  border-radius: 0.5rem;
}

.completion-text {
  font-size: 0.75rem;
  color: var(--blue-dark);
  text-align: center;
}

.completion-track {
  width: 100%;
  height: 0.5rem;
  margin-top: 0.5rem;
  background: #e5e7eb;
  border-radius: 9999px;
  overflow: hidden;
}

.completion-fill {
  height: 100%;
  background: var(--blue);
  border-radius: 9999px;
  transition: width 300ms ease;
}

/* === Side Switch === */
.side-switch {
  display: flex;
  background: #f3f4f6;
  padding: 0.25rem;
  border-radius: 0.5rem;
  margin-bottom: 1rem;
}

.side-tab {
  flex: 1;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.375rem;
  background: transparent;
  font-size: 0.85rem;
  font-weight: 500;
  color: var(--text-secondary);
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.side-tab.active {
  background: #ffffff;
  color: var(--blue);
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08);
}

/* === Export Panel === */
.export-actions {
  display: grid;
  grid-template-columns: 1fr;
  gap: 0.75rem;
}

.export-status {
  margin-top: 0.75rem;
  font-size: 0.8rem;
  color: var(--text-secondary);
  text-align: center;
  word-break: break-all;
}

/* === Preview === */
.preview-panel {
  flex: 1;
}

.preview-frame {
  display: flex;
  justify-content: center;
  padding: 1rem;
  background: #f9fafb;
  border: 1px solid #e5e7eb;
  border-radius: 0.5rem;
}

.card-stage {
  line-height: 0;
}

.card-stage svg {
  display: block;
  box-shadow: 0 1px 4px rgba(0, 0, 0, 0.15);
}

.preview-empty {
  font-size: 0.85rem;
  color: var(--text-muted);
  padding: 2rem 0;
}

.preview-caption {
  margin-top: 0.75rem;
  font-size: 0.8rem;
  color: var(--text-muted);
  text-align: center;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(17, 24, 39, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
}

.confirm-dialog {
  background: #ffffff;
  border-radius: 0.75rem;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  padding: 1.5rem;
  width: min(24rem, 90vw);
}

.dialog-title {
  font-size: 1.1rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.dialog-message {
  font-size: 0.9rem;
  color: var(--text-secondary);
  margin-bottom: 1.25rem;
}

.dialog-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
}

/* === Print === */
/* Only the card stage reaches the printer; the page itself is sized by
   the injected @page rule. */
@media print {
  body {
    background: #ffffff;
  }

  .no-print {
    display: none !important;
  }

  .app-shell, .layout, .preview-panel, .preview-frame {
    margin: 0;
    padding: 0;
    border: none;
    box-shadow: none;
    background: #ffffff;
    max-width: none;
  }

  .card-stage {
    position: fixed;
    top: 0;
    left: 0;
  }

  .card-stage svg {
    box-shadow: none;
  }
}
"#;
