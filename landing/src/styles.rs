//! CSS for the landing page.
//!
//! Dark slate theme with blue/teal gradients. Accent colors are expressed as
//! `accent-*` modifier classes that set `--accent` and `--accent-soft`, so
//! every card, badge and heading reads its color from the same two variables.
//!
//! The stylesheet is inlined by [`crate::render_page`] and by
//! [`crate::LandingStyles`] on the client.

/// Complete CSS for the landing page.
pub const LANDING_CSS: &str = r#"
:root {
    --slate-950: #0b1120;
    --slate-900: #0f172a;
    --slate-800: #1e293b;
    --slate-700: #334155;
    --slate-600: #475569;
    --gray-900: #111827;
    --gray-500: #6b7280;
    --gray-400: #9ca3af;
    --gray-300: #d1d5db;
    --white: #ffffff;
    --blue: #60a5fa;
    --blue-strong: #3b82f6;
    --teal: #2dd4bf;
    --teal-strong: #14b8a6;
    --purple: #c084fc;
    --orange: #fb923c;
    --radius-lg: 16px;
    --radius-xl: 24px;
    --font-sans: Inter, system-ui, -apple-system, Segoe UI, Roboto, sans-serif;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--slate-900);
    color: var(--white);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

button { font: inherit; cursor: pointer; border: none; }

/* Accent families */
.accent-blue   { --accent: var(--blue);   --accent-soft: rgba(59, 130, 246, 0.2); }
.accent-teal   { --accent: var(--teal);   --accent-soft: rgba(20, 184, 166, 0.2); }
.accent-purple { --accent: var(--purple); --accent-soft: rgba(168, 85, 247, 0.2); }
.accent-orange { --accent: var(--orange); --accent-soft: rgba(249, 115, 22, 0.2); }

/* Layout */
.container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 16px;
}
.container-narrow { max-width: 1152px; }

.section { padding: 80px 0; position: relative; }
.band-slate { background: linear-gradient(to bottom, var(--slate-800), var(--slate-900)); }
.band-dark  { background: linear-gradient(to bottom, var(--slate-900), var(--gray-900)); }

.section-header { text-align: center; margin-bottom: 64px; }
.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 16px;
}
.section-description {
    font-size: 1.25rem;
    color: var(--gray-300);
    max-width: 42rem;
    margin: 0 auto;
}

/* Decorative glows */
.glow-layer { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }
.glow {
    position: absolute;
    width: 320px;
    height: 320px;
    border-radius: 9999px;
    background: var(--accent-soft);
    filter: blur(64px);
    opacity: 0.5;
}
.glow-top-right   { top: -160px; right: -160px; }
.glow-bottom-left { bottom: -160px; left: -160px; }

/* Icon discs */
.icon-disc {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 12px;
    border-radius: 9999px;
    background: var(--accent-soft, rgba(59, 130, 246, 0.2));
    color: var(--accent, var(--blue));
    margin-bottom: 24px;
    transition: transform 0.3s ease;
}
.icon-disc-large { padding: 16px; margin-bottom: 32px; }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 12px;
    color: var(--white);
    font-weight: 600;
    background: linear-gradient(to right, var(--blue-strong), var(--teal-strong));
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.btn:hover { transform: scale(1.05); box-shadow: 0 20px 25px -5px rgba(59, 130, 246, 0.25); }
.btn-pill  { padding: 16px 32px; border-radius: 9999px; font-size: 1.125rem; }
.btn-small {
    padding: 8px 16px;
    border-radius: 8px;
    font-size: 1rem;
    gap: 8px;
    background: linear-gradient(to right, var(--teal-strong), var(--blue-strong));
}
.btn-icon { transition: transform 0.3s ease; }
.btn:hover .nudge-down  { transform: translateY(4px); }
.btn:hover .nudge-right { transform: translateX(4px); }

/* Hero */
.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    padding: 0 16px;
    position: relative;
    overflow: hidden;
    background: linear-gradient(135deg, var(--slate-900), #1e3a8a, var(--slate-800));
}
.hero-content { position: relative; z-index: 1; text-align: center; max-width: 56rem; }
.hero-badge {
    display: inline-flex;
    padding: 16px;
    border-radius: 9999px;
    margin-bottom: 32px;
    color: var(--blue);
    background: rgba(59, 130, 246, 0.2);
    border: 1px solid rgba(96, 165, 250, 0.3);
    backdrop-filter: blur(4px);
}
.hero-title {
    font-size: 3.75rem;
    font-weight: 700;
    line-height: 1.15;
    margin: 0 0 24px;
}
.hero-subtitle {
    display: block;
    font-size: 2.25rem;
    font-weight: 500;
    color: #93c5fd;
    margin-top: 8px;
}
.hero-description {
    font-size: 1.5rem;
    color: var(--gray-300);
    max-width: 42rem;
    margin: 0 auto 48px;
}
.highlight { color: var(--teal); font-weight: 500; }
.scroll-hint {
    position: absolute;
    bottom: 32px;
    left: 50%;
    transform: translateX(-50%);
    color: var(--gray-400);
    animation: bounce 1s infinite;
}
@keyframes bounce {
    0%, 100% { transform: translate(-50%, -25%); }
    50% { transform: translate(-50%, 0); }
}

/* Feature cards */
.feature-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 32px; }
.feature-card,
.step-card {
    text-align: center;
    padding: 24px;
    border-radius: var(--radius-lg);
    border: 1px solid rgba(71, 85, 105, 0.5);
    background: linear-gradient(135deg, rgba(51, 65, 85, 0.5), rgba(30, 41, 59, 0.5));
    backdrop-filter: blur(4px);
    transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
}
.feature-card:hover,
.step-card:hover { transform: translateY(-8px); border-color: rgba(96, 165, 250, 0.5); }
.feature-card:hover .icon-disc,
.step-card:hover .icon-disc { transform: scale(1.1); }
.card-title { font-size: 1.25rem; font-weight: 600; margin: 0 0 12px; }
.card-text  { color: var(--gray-400); margin: 0; transition: color 0.3s ease; }
.feature-card:hover .card-text,
.step-card:hover .card-text { color: var(--gray-300); }

/* Model comparison */
.model-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 32px; }
.model-card {
    padding: 32px;
    border-radius: var(--radius-lg);
    border: 1px solid var(--accent-soft);
    background: var(--slate-800);
    transition: transform 0.3s ease, border-color 0.3s ease;
}
.model-card:hover { transform: scale(1.05); border-color: var(--accent); }
.model-card .icon-disc { display: flex; width: fit-content; margin: 0 auto 24px; }
.model-name { font-size: 1.5rem; font-weight: 700; text-align: center; margin: 0 0 16px; }
.model-tagline { text-align: center; font-weight: 500; color: var(--accent); margin: 0 0 24px; }
.model-points { list-style: none; padding: 0; margin: 0; display: grid; gap: 12px; }
.model-point { display: flex; align-items: flex-start; gap: 12px; color: var(--gray-300); }
.bullet-icon { flex-shrink: 0; margin-top: 2px; color: var(--accent); }

/* Sample dataset */
.panel {
    position: relative;
    overflow: hidden;
    border-radius: var(--radius-lg);
    border: 1px solid rgba(71, 85, 105, 0.5);
    background: linear-gradient(135deg, rgba(30, 41, 59, 0.5), rgba(51, 65, 85, 0.3));
    backdrop-filter: blur(4px);
}
.table-scroll { overflow-x: auto; }
.sample-table { width: 100%; border-collapse: collapse; }
.sample-table thead { background: rgba(51, 65, 85, 0.5); }
.column-heading {
    padding: 16px 24px;
    text-align: left;
    font-size: 0.875rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--accent);
}
.sample-row { transition: background-color 0.2s ease; border-top: 1px solid rgba(71, 85, 105, 0.5); }
.sample-row:hover { background: rgba(51, 65, 85, 0.3); }
.sample-row td { padding: 16px 24px; font-size: 0.875rem; }
.sample-row.muted { color: var(--gray-500); }
.cell-strong { font-weight: 500; }
.panel-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    padding: 16px 24px;
    background: rgba(30, 41, 59, 0.3);
    border-top: 1px solid rgba(71, 85, 105, 0.5);
}
.footnote { font-size: 0.875rem; font-style: italic; color: var(--gray-400); margin: 0; }

/* How it works */
.steps { position: relative; }
.steps-connector {
    position: absolute;
    top: 50%;
    left: 0;
    right: 0;
    height: 2px;
    background: linear-gradient(to right, transparent, var(--slate-600), transparent);
}
.steps-grid {
    position: relative;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 48px;
}
.step-card { position: relative; padding: 32px; background: linear-gradient(135deg, var(--accent-soft), transparent); }
.step-card .icon-disc { margin-top: 16px; padding: 16px; }
.step-number {
    position: absolute;
    top: -16px;
    left: 50%;
    transform: translateX(-50%);
    width: 32px;
    height: 32px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    border: 2px solid var(--accent);
    background: var(--slate-900);
    color: var(--accent);
    font-size: 0.875rem;
    font-weight: 700;
}
.steps-footer { text-align: center; margin-top: 64px; }
.chip {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 24px;
    border-radius: 9999px;
    border: 1px solid rgba(100, 116, 139, 0.3);
    background: linear-gradient(to right, rgba(51, 65, 85, 0.5), rgba(71, 85, 105, 0.5));
}
.chip-label  { color: var(--gray-300); font-size: 0.875rem; }
.chip-accent { color: var(--blue); font-weight: 500; }

/* Call to action */
.cta-panel { padding: 48px; border-radius: var(--radius-xl); text-align: center; }
.cta-content { position: relative; z-index: 1; }
.cta-content .section-description { margin-bottom: 32px; }
.fine-print { font-size: 0.875rem; color: var(--gray-400); margin: 24px 0 0; }

/* Footer */
.footer {
    background: var(--slate-900);
    border-top: 1px solid rgba(51, 65, 85, 0.5);
    padding: 48px 0;
    text-align: center;
}
.footer-links { display: flex; justify-content: center; gap: 24px; margin-bottom: 24px; }
.footer-icon-btn {
    padding: 8px;
    border-radius: 9999px;
    background: transparent;
    color: var(--gray-400);
    transition: color 0.3s ease, background-color 0.3s ease;
}
.footer-icon-btn:hover { color: var(--white); background: var(--slate-800); }
.footer-credit { display: flex; justify-content: center; gap: 8px; color: var(--gray-400); margin-bottom: 16px; }
.footer-author { color: var(--white); font-weight: 500; }
.footer-stack { color: var(--gray-500); font-size: 0.875rem; margin: 0; }
.footer-copyright {
    margin: 32px 0 0;
    padding-top: 32px;
    border-top: 1px solid var(--slate-800);
    font-size: 0.75rem;
    color: var(--gray-500);
}

/* Responsive */
@media (max-width: 1024px) {
    .feature-grid, .steps-grid { grid-template-columns: repeat(2, 1fr); gap: 32px; }
    .model-grid { grid-template-columns: 1fr; }
    .steps-connector { display: none; }
    .hero-title { font-size: 3rem; }
    .hero-subtitle { font-size: 1.875rem; }
}

@media (max-width: 640px) {
    .feature-grid, .steps-grid { grid-template-columns: 1fr; }
    .hero-title { font-size: 2.25rem; }
    .hero-subtitle { font-size: 1.5rem; }
    .hero-description { font-size: 1.25rem; }
    .section-title { font-size: 1.875rem; }
    .panel-footer { flex-direction: column; }
    .cta-panel { padding: 32px 16px; }
}
"#;
