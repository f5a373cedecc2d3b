//! Global CSS styles for the portfolio.
//!
//! Dark gallery palette: near-black backgrounds so photographs carry the
//! colour, warm gold for titles, muted sage for controls.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0b0b0c;
  --bg-raised: #141416;
  --bg-overlay: rgba(8, 8, 9, 0.92);
  --border: #26262a;

  /* Accents */
  --gold: #cfa75a;
  --gold-glow: rgba(207, 167, 90, 0.25);
  --sage: #6f8a72;
  --sage-bright: #9dbb9f;

  /* Text */
  --text-primary: #f3f1ed;
  --text-secondary: rgba(243, 241, 237, 0.72);
  --text-muted: rgba(243, 241, 237, 0.5);

  /* Semantic */
  --danger: #e5484d;
  --warning: #f0a020;
  --draft: #8e7cc3;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

img {
  display: block;
  max-width: 100%;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  letter-spacing: 0.06em;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  font-style: italic;
  color: var(--gold);
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
}

.tagline {
  color: var(--text-muted);
  font-size: var(--text-sm);
  letter-spacing: 0.12em;
  text-transform: uppercase;
}

/* === Buttons === */
.btn-primary,
.btn-secondary,
.btn-danger {
  padding: 0.6rem 1.5rem;
  border-radius: 4px;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--gold);
  border: 1px solid var(--gold);
  color: var(--bg);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 20px var(--gold-glow);
  transform: translateY(-1px);
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--sage);
  color: var(--text-primary);
}

.btn-secondary:hover:not(:disabled) {
  border-color: var(--sage-bright);
}

.btn-danger {
  background: var(--danger);
  border: 1px solid var(--danger);
  color: var(--text-primary);
}

.btn-small {
  padding: 0.3rem 0.7rem;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 3px;
  color: var(--text-secondary);
  font-size: var(--text-xs);
  cursor: pointer;
}

.btn-small:hover:not(:disabled) {
  border-color: var(--sage);
  color: var(--text-primary);
}

.btn-small--danger:hover:not(:disabled) {
  border-color: var(--danger);
  color: var(--danger);
}

.btn-link {
  background: none;
  border: none;
  color: var(--sage-bright);
  font-size: var(--text-sm);
  cursor: pointer;
  text-decoration: none;
}

.btn-link:hover {
  color: var(--gold);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Inputs === */
.input {
  width: 100%;
  padding: 0.6rem 0.9rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
}

.input:focus {
  outline: none;
  border-color: var(--gold);
  box-shadow: 0 0 0 1px var(--gold-glow);
}

.field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.field__label {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.toggle {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
}

.form-error {
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Badges === */
.badge {
  display: inline-block;
  padding: 0.15rem 0.5rem;
  border: 1px solid var(--gold);
  border-radius: 2px;
  color: var(--gold);
  font-size: var(--text-xs);
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.badge--draft {
  border-color: var(--draft);
  color: var(--draft);
}

/* === Site Header === */
.site-header {
  position: relative;
  padding: 3rem 2rem 2rem;
  text-align: center;
}

.site-header__admin {
  position: absolute;
  top: 1.25rem;
  right: 1.5rem;
}

/* === Filter Bar (category pills) === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0 2rem 1.5rem;
}

.category-pills {
  display: flex;
  gap: 0.5rem;
  flex-wrap: wrap;
}

.pill {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.375rem 0.85rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: transparent;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover {
  border-color: var(--sage);
  color: var(--text-primary);
}

.pill.selected {
  background: var(--gold);
  border-color: var(--gold);
  color: var(--bg);
}

.pill__count {
  font-size: var(--text-xs);
  opacity: 0.7;
}

.sort-select {
  padding: 0.4rem 0.75rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-primary);
}

/* === Masonry === */
.masonry {
  display: grid;
  gap: 1rem;
  padding: 0 2rem;
  align-items: start;
}

.masonry__column {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.masonry-cell {
  position: relative;
  display: block;
  width: 100%;
  padding: 0;
  border: none;
  background: var(--bg-raised);
  overflow: hidden;
  cursor: zoom-in;
  text-align: left;
}

.masonry-cell__overlay {
  position: absolute;
  inset: auto 0 0 0;
  padding: 1.5rem 1rem 1rem;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.85));
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.masonry-cell:hover .masonry-cell__overlay,
.masonry-cell__overlay--visible {
  opacity: 1;
}

.masonry-cell__title {
  margin-top: 0.4rem;
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 400;
  color: var(--text-primary);
}

.masonry-cell__description {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.skeleton-cell {
  background: linear-gradient(90deg, var(--bg-raised), #1d1d20, var(--bg-raised));
  background-size: 200% 100%;
  animation: shimmer 1.4s ease-in-out infinite;
}

@keyframes shimmer {
  from { background-position: 200% 0; }
  to { background-position: -200% 0; }
}

/* === Progressive images === */
.lqip {
  position: relative;
}

.lqip__placeholder {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: blur(16px);
  transform: scale(1.05);
}

.lqip__img {
  width: 100%;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.lqip--loaded .lqip__img {
  opacity: 1;
}

.lqip__broken {
  aspect-ratio: 4 / 3;
  background: var(--bg-raised);
}

/* === Show more / states === */
.show-more {
  display: flex;
  justify-content: center;
  padding: 2rem;
}

.state-panel {
  max-width: 32rem;
  margin: 3rem auto;
  padding: 2rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  text-align: center;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
}

.state-panel--error {
  border-color: var(--danger);
}

.state-panel--notice {
  border-color: var(--warning);
}

.empty-message,
.loading-message {
  color: var(--text-muted);
  font-style: italic;
  padding: 1rem 0;
}

.startup-error {
  padding: 3rem;
  color: var(--danger);
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: grid;
  grid-template-columns: 4rem 1fr 4rem;
  grid-template-rows: auto 1fr auto;
  background: var(--bg-overlay);
  outline: none;
}

.lightbox--fullscreen {
  background: #000;
}

.lightbox--fullscreen .lightbox__caption {
  display: none;
}

.lightbox__toolbar {
  grid-column: 1 / -1;
  display: flex;
  justify-content: flex-end;
  align-items: center;
  gap: 0.5rem;
  padding: 1rem;
}

.lightbox__counter {
  margin-right: auto;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.lightbox__btn,
.lightbox__nav {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 4px;
  color: var(--text-primary);
  cursor: pointer;
}

.lightbox__btn {
  width: 2.25rem;
  height: 2.25rem;
}

.lightbox__nav {
  align-self: center;
  justify-self: center;
  width: 3rem;
  height: 3rem;
  font-size: var(--text-2xl);
}

.lightbox__stage {
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: auto;
}

.lightbox__img {
  max-height: 80vh;
  object-fit: contain;
  transition: transform var(--transition-fast);
}

.lightbox--fullscreen .lightbox__img {
  max-height: 95vh;
}

.lightbox__caption {
  grid-column: 1 / -1;
  padding: 1rem 2rem 1.5rem;
  text-align: center;
}

/* === Login === */
.login-page {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

.login-card {
  width: 100%;
  max-width: 24rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 2.5rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
}

/* === Admin === */
.admin-page {
  padding: 2rem;
}

.admin-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.5rem;
}

.admin-header__actions {
  display: flex;
  gap: 1rem;
  align-items: center;
}

.admin-layout {
  display: grid;
  grid-template-columns: 1fr 18rem;
  gap: 2rem;
}

.admin-toolbar,
.admin-bulk {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.admin-toolbar__count {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.admin-toolbar__search {
  flex: 1;
  min-width: 14rem;
}

.admin-bulk__count {
  color: var(--gold);
  font-size: var(--text-sm);
}

.alert {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1rem;
  margin-bottom: 1rem;
  border: 1px solid var(--danger);
  border-radius: 4px;
  color: var(--danger);
}

.admin-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr));
  gap: 1rem;
}

.admin-card {
  display: flex;
  flex-direction: column;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 6px;
  overflow: hidden;
  transition: border-color var(--transition-fast);
}

.admin-card[draggable="true"] {
  cursor: grab;
}

.admin-card--draft img {
  opacity: 0.55;
}

.admin-card--selected {
  border-color: var(--gold);
}

.admin-card--drop-target {
  border-color: var(--sage-bright);
  box-shadow: 0 0 0 2px var(--sage);
}

.admin-card__media {
  position: relative;
  aspect-ratio: 4 / 3;
}

.admin-card__media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.admin-card__check {
  position: absolute;
  top: 0.5rem;
  left: 0.5rem;
}

.admin-card__media .badge--draft {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  background: var(--bg-overlay);
}

.admin-card__body {
  padding: 0.75rem;
  flex: 1;
}

.admin-card__title {
  margin-top: 0.35rem;
  font-size: var(--text-base);
  font-weight: 500;
}

.admin-card__date {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.admin-card__actions {
  display: flex;
  gap: 0.4rem;
  padding: 0 0.75rem 0.75rem;
}

/* === Activity === */
.activity-panel {
  align-self: start;
  padding: 1.25rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 6px;
}

.activity-panel__header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  margin-bottom: 0.75rem;
}

.activity-panel__list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  max-height: 60vh;
  overflow-y: auto;
}

.activity-panel__entry {
  display: flex;
  flex-direction: column;
  font-size: var(--text-sm);
}

.activity-panel__time {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
}

.modal {
  width: 100%;
  max-width: 26rem;
  padding: 1.75rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.modal__title {
  font-family: var(--font-serif);
  font-weight: 400;
}

.modal__body {
  color: var(--text-secondary);
}

.modal__error {
  color: var(--danger);
  font-size: var(--text-sm);
}

.modal__actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

/* === Project form === */
.project-form {
  max-width: 40rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.project-form__preview {
  max-height: 16rem;
  object-fit: contain;
  border: 1px solid var(--border);
  border-radius: 4px;
}

.project-form__actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
}

.image-upload {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.image-upload-btn {
  align-self: flex-start;
  padding: 0.5rem 1rem;
  background: transparent;
  border: 1px dashed var(--sage);
  border-radius: 4px;
  color: var(--text-primary);
  cursor: pointer;
}

.image-upload__error {
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Responsive === */
@media (max-width: 1024px) {
  .admin-layout {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 768px) {
  .site-header {
    padding: 2rem 1rem 1.5rem;
  }

  .filter-bar,
  .masonry,
  .admin-page {
    padding-left: 1rem;
    padding-right: 1rem;
  }
}
"#;
