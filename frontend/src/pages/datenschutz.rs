use yew::prelude::*;
use crate::pages::legal::LegalPage;

#[function_component(Datenschutz)]
pub fn datenschutz() -> Html {
    html! {
        <LegalPage title="Datenschutzerklärung">
            <h2>{"1. Datenschutz auf einen Blick"}</h2>

            <h3>{"Allgemeine Hinweise"}</h3>
            <p>
                {"Die folgenden Hinweise geben einen einfachen Überblick darüber, was mit Ihren personenbezogenen Daten passiert, \
                  wenn Sie diese Website besuchen. Personenbezogene Daten sind alle Daten, mit denen Sie persönlich identifiziert werden können."}
            </p>

            <h3>{"Datenerfassung auf dieser Website"}</h3>
            <h4>{"Wer ist verantwortlich für die Datenerfassung auf dieser Website?"}</h4>
            <p>
                {"Die Datenverarbeitung auf dieser Website erfolgt durch den Websitebetreiber. \
                  Dessen Kontaktdaten können Sie dem Impressum dieser Website entnehmen."}
            </p>

            <h4>{"Wie erfassen wir Ihre Daten?"}</h4>
            <p>
                {"Ihre Daten werden zum einen dadurch erhoben, dass Sie uns diese mitteilen. \
                  Hierbei kann es sich z.B. um Daten handeln, die Sie in ein Kontaktformular eingeben."}
            </p>
            <p>
                {"Andere Daten werden automatisch beim Besuch der Website durch unsere IT-Systeme erfasst. \
                  Das sind vor allem technische Daten (z.B. Internetbrowser, Betriebssystem oder Uhrzeit des Seitenaufrufs). \
                  Die Erfassung dieser Daten erfolgt automatisch, sobald Sie diese Website betreten."}
            </p>

            <h4>{"Wofür nutzen wir Ihre Daten?"}</h4>
            <p>
                {"Ein Teil der Daten wird erhoben, um eine fehlerfreie Bereitstellung der Website zu gewährleisten. \
                  Andere Daten können zur Analyse Ihres Nutzerverhaltens verwendet werden."}
            </p>

            <h4>{"Welche Rechte haben Sie bezüglich Ihrer Daten?"}</h4>
            <p>
                {"Sie haben jederzeit das Recht unentgeltlich Auskunft über Herkunft, Empfänger und Zweck Ihrer gespeicherten \
                  personenbezogenen Daten zu erhalten. Sie haben außerdem ein Recht, die Berichtigung, Sperrung oder Löschung \
                  dieser Daten zu verlangen. Hierzu sowie zu weiteren Fragen zum Thema Datenschutz können Sie sich jederzeit \
                  unter der im Impressum angegebenen Adresse an uns wenden. Des Weiteren steht Ihnen ein Beschwerderecht bei \
                  der zuständigen Aufsichtsbehörde zu."}
            </p>
        </LegalPage>
    }
}
