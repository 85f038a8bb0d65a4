//! Region knowledge base
//!
//! Geographic keyword tables used to route a customer to the driver that
//! covers the destination. Every keyword is lowercase; matching is plain
//! substring containment against the lowercased destination and address.
//!
//! The order of [`RegionKnowledgeBase::regions`] and of
//! [`RegionKnowledgeBase::proximity`] is the tie-break order of the
//! classifier: the first region whose list matches wins.

use once_cell::sync::Lazy;

/// Region assumed for central clinics with no other geographic hint
pub const CENTRAL_CLINIC_REGION: &str = "Lisboa";

/// Word that, together with a generic healthcare keyword, marks a central clinic
pub const CENTRAL_MARKER: &str = "central";

/// Keyword lists for one driver region
#[derive(Debug, Clone, Default)]
pub struct RegionProfile {
    pub name: &'static str,
    /// Landmarks, shopping centres, named hospitals outside the hospital list
    pub points_of_interest: &'static [&'static str],
    pub hospitals: &'static [&'static str],
    /// Airports, stations, metro
    pub transports: &'static [&'static str],
    /// Neighbourhoods and localities
    pub localities: &'static [&'static str],
    /// 4-digit postal code prefixes
    pub postal_codes: &'static [&'static str],
}

/// Loose "this is probably near X" hints, checked after every region list
#[derive(Debug, Clone)]
pub struct ProximityEntry {
    pub region: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct RegionKnowledgeBase {
    regions: Vec<RegionProfile>,
    proximity: Vec<ProximityEntry>,
    generic_healthcare: &'static [&'static str],
}

impl RegionKnowledgeBase {
    pub fn new(
        regions: Vec<RegionProfile>,
        proximity: Vec<ProximityEntry>,
        generic_healthcare: &'static [&'static str],
    ) -> Self {
        Self {
            regions,
            proximity,
            generic_healthcare,
        }
    }

    /// Regions in tie-break order
    pub fn regions(&self) -> &[RegionProfile] {
        &self.regions
    }

    /// Proximity hints in tie-break order
    pub fn proximity(&self) -> &[ProximityEntry] {
        &self.proximity
    }

    pub fn generic_healthcare(&self) -> &[&'static str] {
        self.generic_healthcare
    }

    pub fn region(&self, name: &str) -> Option<&RegionProfile> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn region_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.regions.iter().map(|r| r.name)
    }
}

static KNOWLEDGE_BASE: Lazy<RegionKnowledgeBase> = Lazy::new(|| {
    let kb = RegionKnowledgeBase::new(
        vec![lisboa(), sintra(), piquete(), porto(), setubal(), coimbra()],
        proximity_table(),
        GENERIC_HEALTHCARE,
    );
    tracing::debug!(regions = kb.regions.len(), "Region knowledge base built");
    kb
});

/// The compiled-in knowledge base, built on first use
pub fn knowledge_base() -> &'static RegionKnowledgeBase {
    &KNOWLEDGE_BASE
}

const GENERIC_HEALTHCARE: &[&str] = &["clínica", "centro médico", "consultório", "centro de saúde"];

fn proximity_table() -> Vec<ProximityEntry> {
    vec![
        ProximityEntry {
            region: "Lisboa",
            keywords: &[
                "centro",
                "baixa",
                "metro azul",
                "metro amarela",
                "metro verde",
                "metro vermelha",
                "rua das flores",
            ],
        },
        ProximityEntry {
            region: "Sintra",
            keywords: &["linha sintra", "costa", "praia", "marginal"],
        },
        ProximityEntry {
            region: "Setúbal",
            keywords: &["sul", "ponte", "margem sul", "ferry", "cacilheiro"],
        },
        ProximityEntry {
            region: "Porto",
            keywords: &["norte", "douro", "metro porto"],
        },
        ProximityEntry {
            region: "Coimbra",
            keywords: &["centro portugal", "região centro"],
        },
    ]
}

fn lisboa() -> RegionProfile {
    RegionProfile {
        name: "Lisboa",
        points_of_interest: &[],
        hospitals: &[
            "hospital santa maria",
            "hospital dona estefânia",
            "hospital são josé",
            "hospital curry cabral",
            "hospital pulido valente",
            "hospital egas moniz",
            "centro hospitalar lisboa norte",
            "centro hospitalar lisboa central",
            "hospital cruz vermelha",
            "hospital luz lisboa",
            "hospital cuf descobertas",
            "clínica central",
            "clínica de lisboa",
            "centro clínico",
            "policlínica",
            "hospital de santa maria",
            "hospital curry cabral",
            "instituto português oncologia",
        ],
        transports: &[
            "aeroporto lisboa",
            "aeroporto portela",
            "gare do oriente",
            "estação santa apolónia",
            "estação rossio",
            "estação cais do sodré",
            "metro lisboa",
        ],
        localities: &[
            "lisboa",
            "benfica",
            "alvalade",
            "campo grande",
            "marquês de pombal",
            "rossio",
            "chiado",
            "bairro alto",
            "príncipe real",
            "avenidas novas",
            "saldanha",
            "picoas",
            "areeiro",
            "arroios",
            "avenida da república",
            "entrecampos",
            "campolide",
            "telheiras",
            "olivais",
            "parque das nações",
            "oriente",
            "chelas",
            "marvila",
            "beato",
            "penha de frança",
            "graça",
            "mouraria",
            "anjos",
            "estrela",
            "lapa",
            "campo de ourique",
            "amoreiras",
            "rato",
            "santa apolónia",
            "cais do sodré",
            "santos",
            "alcântara",
            "ajuda",
        ],
        postal_codes: &[
            "1000", "1050", "1100", "1150", "1200", "1250", "1300", "1350", "1400", "1450", "1500",
            "1600", "1700",
        ],
    }
}

fn sintra() -> RegionProfile {
    RegionProfile {
        name: "Sintra",
        points_of_interest: &[
            "quinta da regaleira",
            "palácio da pena",
            "casino estoril",
            "centro colombo",
            "aqueduto águas livres",
            "cintramedica",
            "cintramedica portela",
            "portela sintra",
        ],
        hospitals: &[
            "hospital fernando fonseca",
            "hospital amadora-sintra",
            "clínica sintra",
            "clínica cascais",
            "hospital cuf cascais",
        ],
        transports: &[],
        localities: &[
            "sintra",
            "cascais",
            "estoril",
            "oeiras",
            "queluz",
            "mem martins",
            "agualva-cacém",
            "rio de mouro",
            "massamá",
            "algueirão",
            "belas",
            "monte abraão",
            "barcarena",
            "linda-a-velha",
            "algés",
            "carnaxide",
            "paço de arcos",
            "carcavelos",
            "são joão do estoril",
            "monte estoril",
            "alcabideche",
            "malveira",
            "venda do pinheiro",
            "mira sintra",
        ],
        postal_codes: &[
            "2710", "2715", "2720", "2730", "2735", "2740", "2750", "2760", "2770", "2775", "2780",
            "2785", "2790",
        ],
    }
}

fn piquete() -> RegionProfile {
    RegionProfile {
        name: "Piquete",
        points_of_interest: &[
            "centro comercial colombo",
            "hospital beatriz ângelo",
            "aeroporto lisboa proximidade",
            "quinta das conchas",
            "pavilhão atlântico",
        ],
        hospitals: &[],
        transports: &[],
        localities: &[
            "loures",
            "odivelas",
            "amadora",
            "brandoa",
            "reboleira",
            "pontinha",
            "alfragide",
            "venteira",
            "lumiar",
            "carnide",
            "damaia",
            "buraca",
            "falagueira",
            "venda nova",
            "famões",
            "frielas",
            "moscavide",
            "sacavém",
            "prior velho",
            "bobadela",
            "santo antão do tojal",
            "santa iria de azóia",
            "alverca",
            "vila franca de xira",
        ],
        postal_codes: &["2650", "2660", "2670", "2680", "2690", "2700"],
    }
}

fn porto() -> RegionProfile {
    RegionProfile {
        name: "Porto",
        points_of_interest: &[
            "aeroporto francisco sá carneiro",
            "hospital são joão",
            "hospital santo antónio",
            "estação são bento",
            "estação campanhã",
            "centro comercial dolce vita",
        ],
        hospitals: &[],
        transports: &[],
        localities: &[
            "porto",
            "matosinhos",
            "vila nova de gaia",
            "gondomar",
            "valongo",
            "maia",
            "póvoa de varzim",
            "vila do conde",
            "santo tirso",
            "trofa",
            "paços de ferreira",
            "paredes",
            "penafiel",
            "lousada",
            "felgueiras",
            "marco de canaveses",
            "amarante",
            "ermesinde",
            "rio tinto",
        ],
        postal_codes: &[
            "4000", "4050", "4100", "4150", "4200", "4250", "4300", "4350", "4400", "4450", "4460",
            "4470",
        ],
    }
}

fn setubal() -> RegionProfile {
    RegionProfile {
        name: "Setúbal",
        points_of_interest: &[
            "hospital garcia de horta",
            "hospital do barreiro",
            "ponte 25 de abril",
            "ponte vasco da gama",
            "estação roma-areeiro",
            "forum montijo",
        ],
        hospitals: &[],
        transports: &[],
        localities: &[
            "setúbal",
            "almada",
            "barreiro",
            "moita",
            "montijo",
            "alcochete",
            "palmela",
            "sesimbra",
            "seixal",
            "corroios",
            "fernão ferro",
            "charneca de caparica",
            "costa da caparica",
            "trafaria",
            "cacilhas",
            "pragal",
            "cova da piedade",
            "laranjeiro",
            "feijó",
        ],
        postal_codes: &[
            "2800", "2810", "2820", "2830", "2840", "2845", "2850", "2860", "2870", "2890",
        ],
    }
}

fn coimbra() -> RegionProfile {
    RegionProfile {
        name: "Coimbra",
        points_of_interest: &[
            "universidade de coimbra",
            "hospital universitário coimbra",
            "centro hospitalar baixo vouga",
            "hospital de leiria",
        ],
        hospitals: &[],
        transports: &[],
        localities: &[
            "coimbra",
            "figueira da foz",
            "aveiro",
            "viseu",
            "leiria",
            "pombal",
            "marinha grande",
            "óbidos",
            "caldas da rainha",
            "torres vedras",
            "peniche",
            "nazaré",
            "alcobaça",
            "batalha",
            "porto de mós",
            "rio maior",
            "santarém",
            "cartaxo",
            "torres novas",
        ],
        postal_codes: &["3000", "3020", "3030", "3040", "3050", "3060", "3070", "3080", "3090"],
    }
}
