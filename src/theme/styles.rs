//! Global CSS styles for Movieshelf.
//!
//! Dark cinema palette: near-black backgrounds, warm amber titles, teal links.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --screen-black: #0d0d10;
  --screen-raised: #16161c;
  --screen-border: #26262e;

  /* Accents */
  --amber: #f5b942;
  --amber-glow: rgba(245, 185, 66, 0.3);
  --teal: #2ec4b6;
  --teal-glow: rgba(46, 196, 182, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Semantic */
  --available: #4caf50;
  --not-available: #e53950;

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
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
  background: var(--screen-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title,
.details-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--amber);
  text-shadow: 0 0 30px var(--amber-glow);
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  font-style: italic;
  color: var(--amber);
  margin-bottom: 0.5rem;
}

.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem;
}

/* === Buttons === */
.btn-primary {
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  padding: 0.6rem 1.4rem;
  background: transparent;
  border: 1px solid var(--teal);
  border-radius: 4px;
  color: var(--teal);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.btn-primary:hover {
  box-shadow: 0 0 20px var(--teal-glow);
  transform: translateY(-1px);
}

/* === Loading === */
.loading-state {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  min-height: 50vh;
}

.loading-spinner {
  width: 40px;
  height: 40px;
  border: 3px solid var(--screen-border);
  border-top-color: var(--amber);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.loading-message,
.empty-message {
  color: var(--text-muted);
  font-style: italic;
}

/* === Search === */
.search-form {
  display: flex;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.search-input {
  flex: 1;
  padding: 0.6rem 1rem;
  background: var(--screen-raised);
  border: 1px solid var(--screen-border);
  border-radius: 4px;
  color: var(--text-primary);
  font-size: var(--text-base);
}

.search-input:focus {
  outline: none;
  border-color: var(--teal);
}

/* === Movie List === */
.movie-list {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.movie-card {
  background: var(--screen-raised);
  border: 1px solid var(--screen-border);
  border-radius: 6px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.movie-card:hover {
  transform: translateY(-3px);
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.5);
}

.movie-card-poster {
  width: 100%;
  aspect-ratio: 2 / 3;
  object-fit: cover;
  background: var(--screen-border);
}

.movie-card-title {
  padding: 0.5rem 0.75rem 0;
  font-weight: 600;
}

.movie-card-meta {
  padding: 0 0.75rem 0.75rem;
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Details === */
.details-page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem;
}

.details-container {
  display: flex;
  gap: 2rem;
}

.image-container img {
  width: 320px;
  border-radius: 6px;
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.6);
}

.info-container {
  flex: 1;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.data-text-container {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.overview {
  color: var(--text-secondary);
}

.stat-genre-container,
.genre-availability-container {
  display: flex;
  gap: 2rem;
}

.statistics-list {
  list-style: none;
  color: var(--text-secondary);
}

.genre-badges {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.5rem;
}

.genre-badge {
  display: inline-block;
  padding: 0.2rem 0.75rem;
  border: 1px solid var(--screen-border);
  border-radius: 999px;
  font-size: var(--text-sm);
  background: var(--screen-raised);
}

.genre-badge.available {
  border-color: var(--available);
  color: var(--available);
}

.genre-badge.not-available {
  border-color: var(--not-available);
  color: var(--not-available);
}

.price-container {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 0.75rem;
}

/* === Details Navigation === */
.details-nav-container {
  margin-top: 2.5rem;
  border-top: 1px solid var(--screen-border);
  padding-top: 1.5rem;
}

.links-container {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1.5rem;
}

.links {
  display: flex;
  gap: 1rem;
}

.nav-link,
.go-back {
  color: var(--teal);
  text-decoration: none;
  padding: 0.3rem 0.9rem;
  border: 1px solid transparent;
  border-radius: 4px;
  transition: border-color var(--transition-fast);
}

.nav-link:hover,
.go-back:hover {
  border-color: var(--teal);
}

.nav-link.active {
  border-color: var(--amber);
  color: var(--amber);
}

.cast-list,
.review-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.cast-item {
  display: grid;
  grid-template-columns: 64px 1fr;
  column-gap: 1rem;
}

.cast-photo {
  grid-row: span 2;
  width: 64px;
  border-radius: 4px;
}

.cast-character,
.review-content {
  color: var(--text-secondary);
}

.review-author {
  color: var(--amber);
}

/* === Toasts === */
.toaster {
  position: fixed;
  z-index: 1000;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  pointer-events: none;
}

.toaster-top-right { top: 1rem; right: 1rem; }
.toaster-top-left { top: 1rem; left: 1rem; }
.toaster-bottom-right { bottom: 1rem; right: 1rem; }
.toaster-bottom-left { bottom: 1rem; left: 1rem; }

.toast {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  border-radius: 6px;
  background: var(--screen-raised);
  color: var(--text-primary);
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.4);
  animation: toast-in var(--transition-normal);
}

.toast-error { border-left: 3px solid var(--not-available); }
.toast-info { border-left: 3px solid var(--teal); }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(-8px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
