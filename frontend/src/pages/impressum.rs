use yew::prelude::*;
use crate::config;
use crate::pages::legal::LegalPage;

#[function_component(Impressum)]
pub fn impressum() -> Html {
    html! {
        <LegalPage title="Impressum">
            <h2>{"Angaben gemäß § 5 TMG"}</h2>
            <p>
                {"AgentFlow GmbH"}<br />
                {"Musterstraße 123"}<br />
                {"12345 Musterstadt"}
            </p>

            <h3>{"Vertreten durch"}</h3>
            <p>{"Max Mustermann, Geschäftsführer"}</p>

            <h3>{"Kontakt"}</h3>
            <p>
                {"Telefon: +49 (0) 123 456789"}<br />
                {format!("E-Mail: {}", config::CONTACT_EMAIL)}
            </p>

            <h3>{"Registereintrag"}</h3>
            <p>
                {"Eintragung im Handelsregister."}<br />
                {"Registergericht: Amtsgericht Musterstadt"}<br />
                {"Registernummer: HRB 123456"}
            </p>

            <h3>{"Umsatzsteuer-ID"}</h3>
            <p>
                {"Umsatzsteuer-Identifikationsnummer gemäß §27 a Umsatzsteuergesetz: DE 123 456 789"}
            </p>
        </LegalPage>
    }
}
