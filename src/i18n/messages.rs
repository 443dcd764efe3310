// Strings the behaviour layer writes itself; page copy lives in the markup.
use super::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub missing_fields: &'static str,
    pub invalid_email: &'static str,
    pub sending: &'static str,
    pub sent: &'static str,
    pub send_failed: &'static str,
    pub video_unsupported: &'static str,
}

impl Messages {
    /// English is used for codes without a translation.
    pub fn for_locale(locale: Option<Locale>) -> Self {
        match locale.unwrap_or(Locale::En) {
            Locale::En => Self {
                missing_fields: "Please fill in all required fields.",
                invalid_email: "Please enter a valid email address.",
                sending: "Sending...",
                sent: "Thank you! Your inquiry has been sent. We'll respond within 24 hours.",
                send_failed: "Sorry, your inquiry could not be sent. Please try again later.",
                video_unsupported: "Your browser does not support the video tag.",
            },
            Locale::It => Self {
                missing_fields: "Compila tutti i campi obbligatori.",
                invalid_email: "Inserisci un indirizzo email valido.",
                sending: "Invio in corso...",
                sent: "Grazie! La tua richiesta è stata inviata. Ti risponderemo entro 24 ore.",
                send_failed: "Spiacenti, non è stato possibile inviare la richiesta. Riprova più tardi.",
                video_unsupported: "Il tuo browser non supporta il tag video.",
            },
            Locale::Fr => Self {
                missing_fields: "Veuillez remplir tous les champs obligatoires.",
                invalid_email: "Veuillez saisir une adresse email valide.",
                sending: "Envoi en cours...",
                sent: "Merci ! Votre demande a été envoyée. Nous vous répondrons sous 24 heures.",
                send_failed: "Désolé, votre demande n'a pas pu être envoyée. Veuillez réessayer plus tard.",
                video_unsupported: "Votre navigateur ne prend pas en charge la balise vidéo.",
            },
        }
    }
}
