pub const PAGE_STYLES: &str = r#"
/* Shared page sections */
.page {
  padding: var(--space-20) 0;
}

.section {
  padding: var(--space-20) 0;
}

.section-alt {
  background-color: var(--surface);
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.page-title {
  font-size: 3rem;
  font-weight: 700;
  color: var(--heading);
  margin-bottom: var(--space-4);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--heading);
  margin-bottom: var(--space-4);
}

.section-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 48rem;
  margin: 0 auto;
}

.cta-band {
  background-color: var(--band);
  color: var(--text-inverse);
  text-align: center;
  padding: var(--space-16) var(--space-6);
}

.cta-band.rounded {
  border-radius: var(--radius-xl);
  margin-top: var(--space-20);
}

.cta-band h2 {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.cta-band p {
  font-size: 1.125rem;
  opacity: 0.9;
  max-width: 42rem;
  margin: 0 auto var(--space-8);
}

.cta-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
}

/* Home */
.hero {
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  padding: var(--space-20) 0;
}

.hero-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-12);
  align-items: center;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.15;
  color: var(--heading);
  margin-bottom: var(--space-4);
}

.hero-word {
  display: inline-block;
  animation: fade-in-up 0.6s var(--easing-standard) both;
}

@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: none; }
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-6);
  padding-top: var(--space-8);
  text-align: center;
}

.stat-icon {
  font-size: 1.75rem;
  color: var(--accent);
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--accent);
}

.stat-label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.hero-portrait {
  position: relative;
  width: 22rem;
  height: 22rem;
  margin: 0 auto;
}

.portrait-ring {
  position: absolute;
  inset: 0;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, rgba(143, 24, 25, 0.2), rgba(189, 123, 106, 0.2));
  animation: pulse 2s ease-in-out infinite;
}

@keyframes pulse {
  50% { opacity: 0.5; }
}

.portrait-img {
  position: absolute;
  inset: 2rem;
  border-radius: var(--radius-full);
  overflow: hidden;
  border: 4px solid var(--surface);
  box-shadow: var(--shadow-xl);
}

.portrait-img img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* Projects */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: var(--space-8);
}

.project-card {
  position: relative;
}

.project-image {
  aspect-ratio: 4 / 3;
  overflow: hidden;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.project-card:hover .project-image img {
  transform: scale(1.1);
}

.project-overlay {
  position: absolute;
  inset: auto 0 0 0;
  padding: var(--space-6);
  color: #FFFFFF;
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.7), transparent);
}

.project-category {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--brand-soft);
}

.project-title {
  font-size: 1.125rem;
  font-weight: 700;
}

.project-body {
  padding: var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.project-body .project-title {
  color: var(--heading);
  font-size: 1.25rem;
}

.project-desc {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.center {
  text-align: center;
  margin-top: var(--space-12);
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: minmax(260px, 1fr) 2fr;
  gap: var(--space-12);
}

.panel {
  padding: var(--space-8);
  margin-bottom: var(--space-8);
}

.panel h2,
.panel h3 {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--heading);
  margin-bottom: var(--space-6);
}

.panel p {
  color: var(--text-secondary);
  line-height: 1.75;
}

.profile-img {
  width: 100%;
  aspect-ratio: 1;
  object-fit: cover;
}

.info-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  color: var(--text-secondary);
}

.timeline-item {
  position: relative;
  padding-inline-start: var(--space-8);
  padding-bottom: var(--space-8);
  border-inline-start: 2px solid var(--border);
}

.timeline-item:last-child {
  border-color: transparent;
}

.timeline-dot {
  position: absolute;
  inset-inline-start: -7px;
  top: 0;
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
  background-color: var(--accent);
}

.timeline-head {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-2);
}

.timeline-head h4 {
  font-size: 1.125rem;
  color: var(--text-primary);
}

.timeline-meta {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin: var(--space-1) 0 var(--space-2);
}

.edu-list {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-4);
}

.edu-item h4 {
  color: var(--text-primary);
}

.edu-item span {
  font-size: 0.875rem;
  color: var(--accent);
}

/* Services */
.service-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-8);
}

.service-card {
  position: relative;
  padding: var(--space-8);
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.service-card.popular {
  outline: 2px solid var(--accent);
}

.popular-badge {
  position: absolute;
  top: var(--space-4);
  inset-inline-end: var(--space-4);
  padding: var(--space-1) var(--space-3);
  font-size: 0.75rem;
  border-radius: var(--radius-full);
  background-color: var(--accent);
  color: var(--text-inverse);
}

.service-icon {
  font-size: 2rem;
}

.service-card h3 {
  font-size: 1.25rem;
  color: var(--heading);
}

.service-card p {
  color: var(--text-secondary);
}

.feature-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  flex: 1;
}

.feature-list li::before {
  content: "✓";
  color: var(--accent);
  margin-inline-end: var(--space-2);
}

.service-price {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--accent);
}

.process-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-8);
  text-align: center;
}

.step-number {
  width: 4rem;
  height: 4rem;
  margin: 0 auto var(--space-4);
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  background-color: var(--brand);
  color: var(--text-inverse);
  font-size: 1.25rem;
  font-weight: 700;
}

.process-step h4 {
  color: var(--heading);
  margin-bottom: var(--space-2);
}

.process-step p {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-12);
}

.info-cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.info-card {
  display: flex;
  gap: var(--space-4);
  align-items: center;
  padding: var(--space-6);
}

.info-icon {
  font-size: 1.5rem;
  color: var(--accent);
}

.info-card h3 {
  font-size: 1rem;
  color: var(--text-primary);
}

.info-card a,
.info-card span {
  color: var(--text-secondary);
}

.profile-panel {
  text-align: center;
}

.profile-panel img {
  width: 8rem;
  height: 8rem;
  border-radius: var(--radius-full);
  object-fit: cover;
  margin-bottom: var(--space-4);
}

.response-note {
  margin: var(--space-4) 0;
  font-size: 0.875rem;
  color: var(--accent);
}

.social-links {
  display: flex;
  justify-content: center;
  gap: var(--space-3);
  flex-wrap: wrap;
}

.social-link {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.quick-actions {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.btn-whatsapp {
  background-color: var(--whatsapp);
  color: #FFFFFF;
}

.btn-whatsapp:hover {
  background-color: var(--whatsapp-dark);
}

.faq-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-8);
}

.faq-item h3 {
  font-size: 1.125rem;
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.faq-item p {
  color: var(--text-secondary);
}

@media (max-width: 768px) {
  .about-grid {
    grid-template-columns: 1fr;
  }

  .hero-title,
  .page-title {
    font-size: 2.5rem;
  }

  .hero-portrait {
    width: 18rem;
    height: 18rem;
  }
}
"#;
