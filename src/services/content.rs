use super::catalog::ServiceId;
use crate::i18n::locale::Locale;

// Exhaustive over (service, locale) so a missing translation fails to compile.
pub(super) fn title(service: ServiceId, locale: Locale) -> &'static str {
    match (service, locale) {
        (ServiceId::Wedding, Locale::En) => "Wedding Photography Package",
        (ServiceId::Wedding, Locale::It) => "Pacchetto Fotografia Matrimoniale",
        (ServiceId::Wedding, Locale::Fr) => "Package Photographie Mariage",
        (ServiceId::Fashion, Locale::En) => "Fashion & Portrait Photography",
        (ServiceId::Fashion, Locale::It) => "Fotografia Moda & Ritratti",
        (ServiceId::Fashion, Locale::Fr) => "Photographie Mode & Portrait",
        (ServiceId::Corporate, Locale::En) => "Corporate & Event Photography",
        (ServiceId::Corporate, Locale::It) => "Fotografia Aziendale & Eventi",
        (ServiceId::Corporate, Locale::Fr) => "Photographie Corporate & Événements",
    }
}

pub(super) fn details(service: ServiceId, locale: Locale) -> &'static str {
    match (service, locale) {
        (ServiceId::Wedding, Locale::En) => WEDDING_EN,
        (ServiceId::Wedding, Locale::It) => WEDDING_IT,
        (ServiceId::Wedding, Locale::Fr) => WEDDING_FR,
        (ServiceId::Fashion, Locale::En) => FASHION_EN,
        (ServiceId::Fashion, Locale::It) => FASHION_IT,
        (ServiceId::Fashion, Locale::Fr) => FASHION_FR,
        (ServiceId::Corporate, Locale::En) => CORPORATE_EN,
        (ServiceId::Corporate, Locale::It) => CORPORATE_IT,
        (ServiceId::Corporate, Locale::Fr) => CORPORATE_FR,
    }
}

const WEDDING_EN: &str = r#"
<h3>Luxury Wedding Photography</h3>
<div class="service-details">
    <div class="package-info">
        <h4>What's Included:</h4>
        <ul>
            <li>8-12 hours of wedding day coverage</li>
            <li>Pre-wedding consultation and planning</li>
            <li>Professional editing of all photos</li>
            <li>High-resolution digital gallery (500+ photos)</li>
            <li>Online gallery for 2 years</li>
            <li>USB drive with all images</li>
            <li>Print release for personal use</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investment:</h4>
        <p>Starting from €2,500</p>
        <p><small>*Price varies by location and specific requirements</small></p>
    </div>
    <div class="booking-info">
        <h4>Booking:</h4>
        <p>50% deposit required to secure your date</p>
        <p>Limited availability - book 6-12 months in advance</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Contact Us to Book</button>
"#;

const WEDDING_IT: &str = r#"
<h3>Pacchetto Fotografia Matrimoniale di Lusso</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Cosa è Incluso:</h4>
        <ul>
            <li>8-12 ore di copertura del matrimonio</li>
            <li>Consulenza pre-matrimonio e pianificazione</li>
            <li>Editing professionale di tutte le foto</li>
            <li>Galleria digitale ad alta risoluzione (500+ foto)</li>
            <li>Galleria online per 2 anni</li>
            <li>Chiavetta USB con tutte le immagini</li>
            <li>Licenza di stampa per uso personale</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investimento:</h4>
        <p>A partire da €2.500</p>
        <p><small>*Il prezzo varia in base alla location e ai requisiti specifici</small></p>
    </div>
    <div class="booking-info">
        <h4>Prenotazione:</h4>
        <p>Acconto del 50% richiesto per riservare la data</p>
        <p>Disponibilità limitata - prenota 6-12 mesi in anticipo</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Contattaci per Prenotare</button>
"#;

const WEDDING_FR: &str = r#"
<h3>Package Photographie Mariage de Luxe</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Ce qui est Inclus:</h4>
        <ul>
            <li>8-12 heures de couverture du mariage</li>
            <li>Consultation pré-mariage et planification</li>
            <li>Édition professionnelle de toutes les photos</li>
            <li>Galerie numérique haute résolution (500+ photos)</li>
            <li>Galerie en ligne pendant 2 ans</li>
            <li>Clé USB avec toutes les images</li>
            <li>Licence d'impression pour usage personnel</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investissement:</h4>
        <p>À partir de 2 500€</p>
        <p><small>*Le prix varie selon la location et les exigences spécifiques</small></p>
    </div>
    <div class="booking-info">
        <h4>Réservation:</h4>
        <p>Acompte de 50% requis pour sécuriser votre date</p>
        <p>Disponibilité limitée - réservez 6-12 mois à l'avance</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Contactez-nous pour Réserver</button>
"#;

const FASHION_EN: &str = r#"
<h3>Professional Fashion & Portrait Sessions</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Session Options:</h4>
        <ul>
            <li>Studio sessions with professional lighting</li>
            <li>Outdoor location shoots</li>
            <li>Fashion editorial styling</li>
            <li>Corporate headshots</li>
            <li>Personal branding photography</li>
            <li>Model portfolio development</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investment:</h4>
        <p>Studio Session: From €800</p>
        <p>Location Session: From €1,200</p>
        <p>Full Day Shoot: From €2,000</p>
    </div>
    <div class="deliverables">
        <h4>What You Get:</h4>
        <p>20-50 professionally edited high-resolution images</p>
        <p>Online gallery for easy sharing</p>
        <p>Commercial usage rights available</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Book Your Session</button>
"#;

const FASHION_IT: &str = r#"
<h3>Sessioni Professionali Moda & Ritratti</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Opzioni Sessione:</h4>
        <ul>
            <li>Sessioni in studio con illuminazione professionale</li>
            <li>Servizi fotografici in location esterna</li>
            <li>Styling editoriale moda</li>
            <li>Ritratti aziendali</li>
            <li>Fotografia per personal branding</li>
            <li>Sviluppo portfolio modelli</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investimento:</h4>
        <p>Sessione Studio: Da €800</p>
        <p>Sessione Location: Da €1.200</p>
        <p>Servizio Giornata Intera: Da €2.000</p>
    </div>
    <div class="deliverables">
        <h4>Cosa Ricevi:</h4>
        <p>20-50 immagini ad alta risoluzione professionalmente editate</p>
        <p>Galleria online per condividere facilmente</p>
        <p>Diritti uso commerciale disponibili</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Prenota la Tua Sessione</button>
"#;

const FASHION_FR: &str = r#"
<h3>Séances Professionnelles Mode & Portrait</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Options de Séance:</h4>
        <ul>
            <li>Séances en studio avec éclairage professionnel</li>
            <li>Séances en extérieur</li>
            <li>Styling éditorial mode</li>
            <li>Portraits d'entreprise</li>
            <li>Photographie de marque personnelle</li>
            <li>Développement portfolio mannequin</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investissement:</h4>
        <p>Séance Studio: À partir de 800€</p>
        <p>Séance Location: À partir de 1 200€</p>
        <p>Tournage Journée Complète: À partir de 2 000€</p>
    </div>
    <div class="deliverables">
        <h4>Ce que Vous Recevez:</h4>
        <p>20-50 images haute résolution éditées professionnellement</p>
        <p>Galerie en ligne pour partage facile</p>
        <p>Droits d'usage commercial disponibles</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Réservez Votre Séance</button>
"#;

const CORPORATE_EN: &str = r#"
<h3>Professional Corporate Photography</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Corporate Services:</h4>
        <ul>
            <li>Conference and event coverage</li>
            <li>Corporate headshots and team photos</li>
            <li>Product and brand photography</li>
            <li>Office and facility documentation</li>
            <li>Awards ceremonies and galas</li>
            <li>Marketing and promotional content</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investment:</h4>
        <p>Half Day: From €1,500</p>
        <p>Full Day: From €2,500</p>
        <p>Multi-day Events: Custom quote</p>
    </div>
    <div class="deliverables">
        <h4>Professional Service:</h4>
        <p>Same-day or next-day delivery available</p>
        <p>Full commercial usage rights included</p>
        <p>Discrete, professional coverage</p>
        <p>High-resolution edited images</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Get Corporate Quote</button>
"#;

const CORPORATE_IT: &str = r#"
<h3>Fotografia Aziendale Professionale</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Servizi Aziendali:</h4>
        <ul>
            <li>Copertura conferenze ed eventi</li>
            <li>Ritratti aziendali e foto team</li>
            <li>Fotografia prodotti e brand</li>
            <li>Documentazione uffici e strutture</li>
            <li>Cerimonie di premiazione e gala</li>
            <li>Contenuti marketing e promozionali</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investimento:</h4>
        <p>Mezza Giornata: Da €1.500</p>
        <p>Giornata Intera: Da €2.500</p>
        <p>Eventi Multi-giorno: Preventivo personalizzato</p>
    </div>
    <div class="deliverables">
        <h4>Servizio Professionale:</h4>
        <p>Consegna in giornata o il giorno dopo disponibile</p>
        <p>Diritti uso commerciale completo inclusi</p>
        <p>Copertura discreta e professionale</p>
        <p>Immagini modificate ad alta risoluzione</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Richiedi Preventivo Aziendale</button>
"#;

const CORPORATE_FR: &str = r#"
<h3>Photographie Corporate Professionnelle</h3>
<div class="service-details">
    <div class="package-info">
        <h4>Services Corporate:</h4>
        <ul>
            <li>Couverture conférences et événements</li>
            <li>Portraits d'entreprise et photos d'équipe</li>
            <li>Photographie produits et marque</li>
            <li>Documentation bureaux et installations</li>
            <li>Cérémonies de remise de prix et galas</li>
            <li>Contenu marketing et promotionnel</li>
        </ul>
    </div>
    <div class="pricing-info">
        <h4>Investissement:</h4>
        <p>Demi-journée: À partir de 1 500€</p>
        <p>Journée complète: À partir de 2 500€</p>
        <p>Événements multi-jours: Devis personnalisé</p>
    </div>
    <div class="deliverables">
        <h4>Service Professionnel:</h4>
        <p>Livraison le jour même ou le lendemain disponible</p>
        <p>Droits d'usage commercial complets inclus</p>
        <p>Couverture discrète et professionnelle</p>
        <p>Images éditées haute résolution</p>
    </div>
</div>
<button type="button" class="btn-primary" data-action="close-service-modal">Demander Devis Corporate</button>
"#;
