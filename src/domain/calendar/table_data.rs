//! Compiled-in hallowed objects, one per month/day.

// Data credits: https://github.com/tobozo/SaintObjetBot

use super::entry::Genre::{Female, Male, Neutral};
use super::entry::{CalendarEntry, MonthDay};

/// Every month/day of a leap year, in calendar order.
pub(super) static ENTRIES: [CalendarEntry; 366] = [
    CalendarEntry::new(MonthDay::new(1, 1), "veisalgie", "veisalgies", Female),
    CalendarEntry::new(MonthDay::new(1, 2), "ankylostome", "ankylostomes", Male),
    CalendarEntry::new(MonthDay::new(1, 3), "apex", "apexes", Male),
    CalendarEntry::new(MonthDay::new(1, 4), "arlequin", "arlequins", Male),
    CalendarEntry::new(MonthDay::new(1, 5), "bengali", "bengalis", Male),
    CalendarEntry::new(MonthDay::new(1, 6), "bouquetin", "bouquetins", Male),
    CalendarEntry::new(MonthDay::new(1, 7), "cancrelat", "cancrelats", Male),
    CalendarEntry::new(MonthDay::new(1, 8), "cerf-volant", "cerfs-volants", Male),
    CalendarEntry::new(MonthDay::new(1, 9), "colibri", "colibris", Male),
    CalendarEntry::new(MonthDay::new(1, 10), "dromadaire", "dromadaires", Male),
    CalendarEntry::new(MonthDay::new(1, 11), "embrouillamini", "embrouillaminis", Male),
    CalendarEntry::new(MonthDay::new(1, 12), "fauconneau", "fauconeaux", Male),
    CalendarEntry::new(MonthDay::new(1, 13), "gambette", "gambettes", Female),
    CalendarEntry::new(MonthDay::new(1, 14), "hérisson", "hérissons", Male),
    CalendarEntry::new(MonthDay::new(1, 15), "javelot", "javelots", Male),
    CalendarEntry::new(MonthDay::new(1, 16), "kangourou", "kangourous", Male),
    CalendarEntry::new(MonthDay::new(1, 17), "lampion", "lampions", Male),
    CalendarEntry::new(MonthDay::new(1, 18), "manuscrit", "manuscrits", Male),
    CalendarEntry::new(MonthDay::new(1, 19), "quignon", "quignons", Male),
    CalendarEntry::new(MonthDay::new(1, 20), "tablier", "tabliers", Male),
    CalendarEntry::new(MonthDay::new(1, 21), "zorglub", "zorglubs", Male),
    CalendarEntry::new(MonthDay::new(1, 22), "pataquès", "pataquès", Male),
    CalendarEntry::new(MonthDay::new(1, 23), "bobèche", "bobèches", Female),
    CalendarEntry::new(MonthDay::new(1, 24), "zézaiement", "zézaiements", Male),
    CalendarEntry::new(MonthDay::new(1, 25), "flibustier", "flibustiers", Male),
    CalendarEntry::new(MonthDay::new(1, 26), "mirliton", "mirlitons", Male),
    CalendarEntry::new(MonthDay::new(1, 27), "craspouille", "craspouilles", Female),
    CalendarEntry::new(MonthDay::new(1, 28), "zigouigoui", "zigouigouis", Male),
    CalendarEntry::new(MonthDay::new(1, 29), "faribole", "fariboles", Female),
    CalendarEntry::new(MonthDay::new(1, 30), "pantouflette", "pantouflettes", Female),
    CalendarEntry::new(MonthDay::new(1, 31), "zinzin", "zinzins", Male),
    CalendarEntry::new(MonthDay::new(2, 1), "bibelot", "bibelots", Male),
    CalendarEntry::new(MonthDay::new(2, 2), "ukulélé", "ukulélés", Male),
    CalendarEntry::new(MonthDay::new(2, 3), "grigris", "grigris", Male),
    CalendarEntry::new(MonthDay::new(2, 4), "crinoline", "crinolines", Female),
    CalendarEntry::new(MonthDay::new(2, 5), "turlutaine", "turlutaines", Female),
    CalendarEntry::new(MonthDay::new(2, 6), "boudeuse", "boudeuses", Female),
    CalendarEntry::new(MonthDay::new(2, 7), "tralala", "tralalas", Male),
    CalendarEntry::new(MonthDay::new(2, 8), "carambolage", "carambolages", Male),
    CalendarEntry::new(MonthDay::new(2, 9), "frimousse", "frimousses", Female),
    CalendarEntry::new(MonthDay::new(2, 10), "catafalque", "catafalques", Male),
    CalendarEntry::new(MonthDay::new(2, 11), "chicane", "chicanes", Female),
    CalendarEntry::new(MonthDay::new(2, 12), "barbichette", "barbichettes", Female),
    CalendarEntry::new(MonthDay::new(2, 13), "croquignole", "croquignoles", Male),
    CalendarEntry::new(MonthDay::new(2, 14), "rouleau de sopalin", "rouleaux de sopalin", Male),
    CalendarEntry::new(MonthDay::new(2, 15), "clavicule", "clavicules", Female),
    CalendarEntry::new(MonthDay::new(2, 16), "bambinette", "bambinettes", Female),
    CalendarEntry::new(MonthDay::new(2, 17), "sporange", "sporanges", Male),
    CalendarEntry::new(MonthDay::new(2, 18), "fléole", "fléoles", Female),
    CalendarEntry::new(MonthDay::new(2, 19), "goubelin", "goubelins", Male),
    CalendarEntry::new(MonthDay::new(2, 20), "bélin", "bélins", Male),
    CalendarEntry::new(MonthDay::new(2, 21), "grébiche", "grébiches", Female),
    CalendarEntry::new(MonthDay::new(2, 22), "pipistrelle", "pipistrelles", Female),
    CalendarEntry::new(MonthDay::new(2, 23), "badine", "badines", Female),
    CalendarEntry::new(MonthDay::new(2, 24), "guttule", "guttules", Female),
    CalendarEntry::new(MonthDay::new(2, 25), "sautoir", "sautoirs", Male),
    CalendarEntry::new(MonthDay::new(2, 26), "tourniquet", "tourniquets", Male),
    CalendarEntry::new(MonthDay::new(2, 27), "grenouillère", "grenouillères", Female),
    CalendarEntry::new(MonthDay::new(2, 28), "torsade", "torsades", Female),
    CalendarEntry::new(MonthDay::new(2, 29), "calicot", "calicots", Male),
    CalendarEntry::new(MonthDay::new(3, 1), "gousset", "goussets", Male),
    CalendarEntry::new(MonthDay::new(3, 2), "tournebille", "tournebilles", Female),
    CalendarEntry::new(MonthDay::new(3, 3), "gibelotte", "gibelottes", Female),
    CalendarEntry::new(MonthDay::new(3, 4), "cabestan", "cabestans", Male),
    CalendarEntry::new(MonthDay::new(3, 5), "mélopée", "mélodées", Female),
    CalendarEntry::new(MonthDay::new(3, 6), "galurin", "galurins", Male),
    CalendarEntry::new(MonthDay::new(3, 7), "joug", "jougs", Male),
    CalendarEntry::new(MonthDay::new(3, 8), "cabriole", "cabrioles", Female),
    CalendarEntry::new(MonthDay::new(3, 9), "attache parisienne", "attaches parisiennes", Female),
    CalendarEntry::new(MonthDay::new(3, 10), "bac à charbon", "bacs à charbon", Male),
    CalendarEntry::new(MonthDay::new(3, 11), "béquille", "béquilles", Female),
    CalendarEntry::new(MonthDay::new(3, 12), "boussole", "boussoles", Female),
    CalendarEntry::new(MonthDay::new(3, 13), "caméra argentique", "caméras argentiques", Female),
    CalendarEntry::new(MonthDay::new(3, 14), "canne", "cannes", Female),
    CalendarEntry::new(MonthDay::new(3, 15), "cloche", "cloches", Female),
    CalendarEntry::new(MonthDay::new(3, 16), "clou", "clous", Male),
    CalendarEntry::new(MonthDay::new(3, 17), "coton-tige", "cotons-tiges", Male),
    CalendarEntry::new(MonthDay::new(3, 18), "disque vinyle", "disques vinyles", Male),
    CalendarEntry::new(MonthDay::new(3, 19), "encrier", "encriers", Male),
    CalendarEntry::new(MonthDay::new(3, 20), "fer à repasser", "fers à repasser", Male),
    CalendarEntry::new(MonthDay::new(3, 21), "fusil à pompe", "fusils à pompe", Male),
    CalendarEntry::new(MonthDay::new(3, 22), "gourde", "gourdes", Female),
    CalendarEntry::new(MonthDay::new(3, 23), "imprimante à marguerite", "imprimantes à marguerite", Female),
    CalendarEntry::new(MonthDay::new(3, 24), "tendu-de-majeur", "doigts d'honneur", Male),
    CalendarEntry::new(MonthDay::new(3, 25), "machine à écrire", "machines à écrire", Female),
    CalendarEntry::new(MonthDay::new(3, 26), "poignée de porte", "poignées de porte", Female),
    CalendarEntry::new(MonthDay::new(3, 27), "savon de marseille", "savons de marseille", Male),
    CalendarEntry::new(MonthDay::new(3, 28), "stylo à plume", "stylos à plume", Male),
    CalendarEntry::new(MonthDay::new(3, 29), "téléviseur cathodique", "téléviseurs cathodiques", Male),
    CalendarEntry::new(MonthDay::new(3, 30), "urne funéraire", "urnes funéraires", Female),
    CalendarEntry::new(MonthDay::new(3, 31), "balai", "balais", Male),
    CalendarEntry::new(MonthDay::new(4, 1), "microplastique", "microplastiques", Male),
    CalendarEntry::new(MonthDay::new(4, 2), "bougie", "bougies", Female),
    CalendarEntry::new(MonthDay::new(4, 3), "cabine téléphonique", "cabines téléphoniques", Female),
    CalendarEntry::new(MonthDay::new(4, 4), "canapé", "canapés", Male),
    CalendarEntry::new(MonthDay::new(4, 5), "carte postale", "cartes postales", Female),
    CalendarEntry::new(MonthDay::new(4, 6), "ceinture", "ceintures", Female),
    CalendarEntry::new(MonthDay::new(4, 7), "engrenage", "engrenages", Male),
    CalendarEntry::new(MonthDay::new(4, 8), "escalier", "escaliers", Male),
    CalendarEntry::new(MonthDay::new(4, 9), "monogramme", "monogrammes", Male),
    CalendarEntry::new(MonthDay::new(4, 10), "acanthe", "acanthes", Female),
    CalendarEntry::new(MonthDay::new(4, 11), "humus", "humus", Male),
    CalendarEntry::new(MonthDay::new(4, 12), "entroque", "entroque", Female),
    CalendarEntry::new(MonthDay::new(4, 13), "fourneau", "fourneaux", Male),
    CalendarEntry::new(MonthDay::new(4, 14), "ampoule multiprise et rallonge", "ampoules multiprises et rallonges", Female),
    CalendarEntry::new(MonthDay::new(4, 15), "alésoir à cliquet", "alésoirs à cliquets", Male),
    CalendarEntry::new(MonthDay::new(4, 16), "clapier", "clapiers", Male),
    CalendarEntry::new(MonthDay::new(4, 17), "taloche", "taloches", Female),
    CalendarEntry::new(MonthDay::new(4, 18), "occiput", "occiputs", Male),
    CalendarEntry::new(MonthDay::new(4, 19), "diodon", "diodons", Male),
    CalendarEntry::new(MonthDay::new(4, 20), "tricorne", "tricornes", Male),
    CalendarEntry::new(MonthDay::new(4, 21), "spume", "spumes", Female),
    CalendarEntry::new(MonthDay::new(4, 22), "manchon", "manchons", Male),
    CalendarEntry::new(MonthDay::new(4, 23), "limaçon", "limaçons", Male),
    CalendarEntry::new(MonthDay::new(4, 24), "levraut", "levrauts", Male),
    CalendarEntry::new(MonthDay::new(4, 25), "gymkhana", "gymkhanas", Male),
    CalendarEntry::new(MonthDay::new(4, 26), "dosimètre", "dosimètres", Male),
    CalendarEntry::new(MonthDay::new(4, 27), "queue-de-pie", "queues-de-pie", Female),
    CalendarEntry::new(MonthDay::new(4, 28), "clé à pipe débouchée", "clés à pipe débouchées", Female),
    CalendarEntry::new(MonthDay::new(4, 29), "perruque", "perruques", Female),
    CalendarEntry::new(MonthDay::new(4, 30), "traille", "trailles", Female),
    CalendarEntry::new(MonthDay::new(5, 1), "tripalium", "tripaliums", Male),
    CalendarEntry::new(MonthDay::new(5, 2), "pastille", "pastilles", Female),
    CalendarEntry::new(MonthDay::new(5, 3), "francisque", "francisques", Female),
    CalendarEntry::new(MonthDay::new(5, 4), "pirouette", "pirouettes", Female),
    CalendarEntry::new(MonthDay::new(5, 5), "marmouset", "marmousets", Male),
    CalendarEntry::new(MonthDay::new(5, 6), "pédicelle", "pédicelles", Male),
    CalendarEntry::new(MonthDay::new(5, 7), "hypsomètre", "hypsomètres", Male),
    CalendarEntry::new(MonthDay::new(5, 8), "lambrequin", "lambrequins", Male),
    CalendarEntry::new(MonthDay::new(5, 9), "cribellum", "cribellums", Male),
    CalendarEntry::new(MonthDay::new(5, 10), "hélicoïde", "hélicoïdes", Female),
    CalendarEntry::new(MonthDay::new(5, 11), "quenouille", "quenouilles", Female),
    CalendarEntry::new(MonthDay::new(5, 12), "zythum", "zytha", Male),
    CalendarEntry::new(MonthDay::new(5, 13), "sarbacane", "sarbacanes", Female),
    CalendarEntry::new(MonthDay::new(5, 14), "turion", "turions", Male),
    CalendarEntry::new(MonthDay::new(5, 15), "blaireau", "blaireaux", Male),
    CalendarEntry::new(MonthDay::new(5, 16), "sémaphore", "sémaphores", Female),
    CalendarEntry::new(MonthDay::new(5, 17), "crispatule", "crispatules", Female),
    CalendarEntry::new(MonthDay::new(5, 18), "zist", "zists", Male),
    CalendarEntry::new(MonthDay::new(5, 19), "chiquenaude", "chiquenaudes", Female),
    CalendarEntry::new(MonthDay::new(5, 20), "sagouin", "sagouins", Male),
    CalendarEntry::new(MonthDay::new(5, 21), "borborygme", "borborygmes", Male),
    CalendarEntry::new(MonthDay::new(5, 22), "zéphyr", "zéphyrs", Male),
    CalendarEntry::new(MonthDay::new(5, 23), "schnock", "schnocks", Male),
    CalendarEntry::new(MonthDay::new(5, 24), "pendeloque", "pendeloques", Female),
    CalendarEntry::new(MonthDay::new(5, 25), "falbala", "falbalas", Male),
    CalendarEntry::new(MonthDay::new(5, 26), "nycthémère", "nycthémères", Male),
    CalendarEntry::new(MonthDay::new(5, 27), "houppier", "houppiers", Male),
    CalendarEntry::new(MonthDay::new(5, 28), "suaire", "suaires", Male),
    CalendarEntry::new(MonthDay::new(5, 29), "jable", "jables", Male),
    CalendarEntry::new(MonthDay::new(5, 30), "goulot", "goulots", Male),
    CalendarEntry::new(MonthDay::new(5, 31), "bourdalou", "bourdalous", Male),
    CalendarEntry::new(MonthDay::new(6, 1), "zibeline", "zibelines", Female),
    CalendarEntry::new(MonthDay::new(6, 2), "turpitude", "turpitudes", Female),
    CalendarEntry::new(MonthDay::new(6, 3), "carafon", "carafons", Male),
    CalendarEntry::new(MonthDay::new(6, 4), "roubignole", "roubignoles", Female),
    CalendarEntry::new(MonthDay::new(6, 5), "cantharide", "cantharides", Female),
    CalendarEntry::new(MonthDay::new(6, 6), "pédoncule", "pédoncules", Male),
    CalendarEntry::new(MonthDay::new(6, 7), "élytre", "élytres", Male),
    CalendarEntry::new(MonthDay::new(6, 8), "cressonnière", "cressonnières", Female),
    CalendarEntry::new(MonthDay::new(6, 9), "araignée", "araignées", Female),
    CalendarEntry::new(MonthDay::new(6, 10), "sarment", "sarments", Male),
    CalendarEntry::new(MonthDay::new(6, 11), "argousin", "argousins", Male),
    CalendarEntry::new(MonthDay::new(6, 12), "poudingue", "poudingues", Male),
    CalendarEntry::new(MonthDay::new(6, 13), "pandiculation", "pandiculations", Female),
    CalendarEntry::new(MonthDay::new(6, 14), "gaudriole", "gaudrioles", Female),
    CalendarEntry::new(MonthDay::new(6, 15), "chenapan", "chenapans", Male),
    CalendarEntry::new(MonthDay::new(6, 16), "carabistouille", "carabistouilles", Female),
    CalendarEntry::new(MonthDay::new(6, 17), "baliverne", "balivernes", Female),
    CalendarEntry::new(MonthDay::new(6, 18), "histrion", "histrions", Male),
    CalendarEntry::new(MonthDay::new(6, 19), "babiole", "babioles", Female),
    CalendarEntry::new(MonthDay::new(6, 20), "pétouille", "pétouilles", Female),
    CalendarEntry::new(MonthDay::new(6, 21), "baragouin", "baragouins", Male),
    CalendarEntry::new(MonthDay::new(6, 22), "patatras", "patatras", Male),
    CalendarEntry::new(MonthDay::new(6, 23), "alambic", "alambics", Male),
    CalendarEntry::new(MonthDay::new(6, 24), "billevesée", "billevesées", Female),
    CalendarEntry::new(MonthDay::new(6, 25), "rigolboche", "rigolboches", Female),
    CalendarEntry::new(MonthDay::new(6, 26), "turlupin", "turlupins", Male),
    CalendarEntry::new(MonthDay::new(6, 27), "turlurette", "turlurettes", Female),
    CalendarEntry::new(MonthDay::new(6, 28), "guignol", "guignols", Male),
    CalendarEntry::new(MonthDay::new(6, 29), "bille-molle", "billes-molles", Female),
    CalendarEntry::new(MonthDay::new(6, 30), "brimborion", "brimborions", Male),
    CalendarEntry::new(MonthDay::new(7, 1), "mirliflore", "mirliflores", Female),
    CalendarEntry::new(MonthDay::new(7, 2), "clapiotte", "clapiottes", Female),
    CalendarEntry::new(MonthDay::new(7, 3), "gaffophone", "gaffophones", Male),
    CalendarEntry::new(MonthDay::new(7, 4), "légumineur", "légumineurs", Male),
    CalendarEntry::new(MonthDay::new(7, 5), "micro-onduleur", "micro-onduleurs", Male),
    CalendarEntry::new(MonthDay::new(7, 6), "frite-magique", "frites-magiques", Female),
    CalendarEntry::new(MonthDay::new(7, 7), "extracteur du potentiel de point zéro", "extracteurs du potentiel de point zéro", Male),
    CalendarEntry::new(MonthDay::new(7, 8), "réveil-tartine", "réveils-tartines", Male),
    CalendarEntry::new(MonthDay::new(7, 9), "horloge-moussante", "horloges-moussantes", Female),
    CalendarEntry::new(MonthDay::new(7, 10), "canapélicoptère", "canapélicoptères", Male),
    CalendarEntry::new(MonthDay::new(7, 11), "éponge-lumineuse", "éponges-lumineuses", Female),
    CalendarEntry::new(MonthDay::new(7, 12), "spatulon", "spatulons", Male),
    CalendarEntry::new(MonthDay::new(7, 13), "vaissellier-volant", "vaisselliers-volants", Male),
    CalendarEntry::new(MonthDay::new(7, 14), "boîte-à-bêtises", "boîtes-à-bêtises", Female),
    CalendarEntry::new(MonthDay::new(7, 15), "télé-poubelle", "télé-poubelles", Female),
    CalendarEntry::new(MonthDay::new(7, 16), "baignoire-parlante", "baignoires-parlantes", Female),
    CalendarEntry::new(MonthDay::new(7, 17), "armoire-à-glissade", "armoires-à-glissade", Female),
    CalendarEntry::new(MonthDay::new(7, 18), "pierre manale", "pierres manales", Female),
    CalendarEntry::new(MonthDay::new(7, 19), "grille-pain de l'espace", "grilles-pains de l'espace", Male),
    CalendarEntry::new(MonthDay::new(7, 20), "robot-raccommodeur", "robots-raccommodeurs", Male),
    CalendarEntry::new(MonthDay::new(7, 21), "fourchette-à-comptine", "fourchettes-à-comptines", Female),
    CalendarEntry::new(MonthDay::new(7, 22), "pantoufle-réactive", "pantoufles-réactives", Female),
    CalendarEntry::new(MonthDay::new(7, 23), "coussin-péteur", "coussins-péteurs", Male),
    CalendarEntry::new(MonthDay::new(7, 24), "télé-orbitale", "télés-orbitales", Female),
    CalendarEntry::new(MonthDay::new(7, 25), "brosse-à-dent sonique", "brosses-à-dent soniques", Female),
    CalendarEntry::new(MonthDay::new(7, 26), "couette-intelligente", "couettes-intelligentes", Female),
    CalendarEntry::new(MonthDay::new(7, 27), "pyjama-à-histoires", "pyjamas-à-histoires", Male),
    CalendarEntry::new(MonthDay::new(7, 28), "bol-à-mystère", "bols-à-mystère", Male),
    CalendarEntry::new(MonthDay::new(7, 29), "tabouret-téléphone", "tabourets-téléphone", Male),
    CalendarEntry::new(MonthDay::new(7, 30), "miroir-savant", "miroirs-savants", Male),
    CalendarEntry::new(MonthDay::new(7, 31), "tapis-volant d'intérieur", "tapis-volants d'intérieur", Male),
    CalendarEntry::new(MonthDay::new(8, 1), "oreiller-à-musique", "oreillers-à-musique", Male),
    CalendarEntry::new(MonthDay::new(8, 2), "papier-peint interactif", "papiers-peints interactifs", Male),
    CalendarEntry::new(MonthDay::new(8, 3), "xylophone", "xylophones", Male),
    CalendarEntry::new(MonthDay::new(8, 4), "guilloché", "guillochés", Male),
    CalendarEntry::new(MonthDay::new(8, 5), "djembé", "djembés", Male),
    CalendarEntry::new(MonthDay::new(8, 6), "caipirinha", "caipirinhas", Female),
    CalendarEntry::new(MonthDay::new(8, 7), "tzatziki", "tzatzikis", Neutral),
    CalendarEntry::new(MonthDay::new(8, 8), "karaoke", "karaokes", Male),
    CalendarEntry::new(MonthDay::new(8, 9), "kantele", "kanteles", Female),
    CalendarEntry::new(MonthDay::new(8, 10), "haiku", "haikus", Male),
    CalendarEntry::new(MonthDay::new(8, 11), "colchique", "colchiques", Female),
    CalendarEntry::new(MonthDay::new(8, 12), "molinillo", "molinillos", Male),
    CalendarEntry::new(MonthDay::new(8, 13), "quokka", "quokkas", Female),
    CalendarEntry::new(MonthDay::new(8, 14), "duduk", "duduks", Male),
    CalendarEntry::new(MonthDay::new(8, 15), "balalaïka", "balalaïkas", Female),
    CalendarEntry::new(MonthDay::new(8, 16), "fajitas", "fajitas", Female),
    CalendarEntry::new(MonthDay::new(8, 17), "bobineau", "bobineaux", Male),
    CalendarEntry::new(MonthDay::new(8, 18), "fjord", "fjords", Male),
    CalendarEntry::new(MonthDay::new(8, 19), "tsampa", "tsampas", Female),
    CalendarEntry::new(MonthDay::new(8, 20), "qipao", "qipaos", Female),
    CalendarEntry::new(MonthDay::new(8, 21), "boomerang", "boomerangs", Male),
    CalendarEntry::new(MonthDay::new(8, 22), "cachou", "cachous", Male),
    CalendarEntry::new(MonthDay::new(8, 23), "sac à dos", "sacs à dos", Male),
    CalendarEntry::new(MonthDay::new(8, 24), "brosse à dents", "brosses à dents", Female),
    CalendarEntry::new(MonthDay::new(8, 25), "lampe de bureau", "lampes de bureau", Female),
    CalendarEntry::new(MonthDay::new(8, 26), "tapis de souris", "tapis de souris", Male),
    CalendarEntry::new(MonthDay::new(8, 27), "pot de fleurs", "pots de fleurs", Male),
    CalendarEntry::new(MonthDay::new(8, 28), "brosse à cheveux", "brosses à cheveux", Female),
    CalendarEntry::new(MonthDay::new(8, 29), "boucle d'oreille", "boucles d'oreilles", Female),
    CalendarEntry::new(MonthDay::new(8, 30), "manette de jeu", "manettes de jeu", Female),
    CalendarEntry::new(MonthDay::new(8, 31), "tapis de yoga", "tapis de yoga", Male),
    CalendarEntry::new(MonthDay::new(9, 1), "corde à sauter", "cordes à sauter", Female),
    CalendarEntry::new(MonthDay::new(9, 2), "haltère", "haltères", Male),
    CalendarEntry::new(MonthDay::new(9, 3), "trottinette", "trottinettes", Female),
    CalendarEntry::new(MonthDay::new(9, 4), "sac de couchage", "sacs de couchage", Male),
    CalendarEntry::new(MonthDay::new(9, 5), "réchaud de camping", "réchauds de camping", Male),
    CalendarEntry::new(MonthDay::new(9, 6), "chaussure de randonnée", "chaussures de randonnée", Female),
    CalendarEntry::new(MonthDay::new(9, 7), "taille-crayon", "taille-crayons", Male),
    CalendarEntry::new(MonthDay::new(9, 8), "agrafeuse", "agrafeuses", Female),
    CalendarEntry::new(MonthDay::new(9, 9), "aspirateur", "aspirateurs", Male),
    CalendarEntry::new(MonthDay::new(9, 10), "lave-linge", "lave-linges", Male),
    CalendarEntry::new(MonthDay::new(9, 11), "sèche-linge", "sèche-linges", Male),
    CalendarEntry::new(MonthDay::new(9, 12), "machine à coudre", "machines à coudre", Female),
    CalendarEntry::new(MonthDay::new(9, 13), "serpillère", "serpillères", Female),
    CalendarEntry::new(MonthDay::new(9, 14), "tronçonneuse", "tronçonneuses", Female),
    CalendarEntry::new(MonthDay::new(9, 15), "débroussailleuse", "débroussailleuses", Female),
    CalendarEntry::new(MonthDay::new(9, 16), "motoculteur", "motoculteurs", Male),
    CalendarEntry::new(MonthDay::new(9, 17), "râteau", "râteaux", Male),
    CalendarEntry::new(MonthDay::new(9, 18), "clé à molette", "clés à molette", Female),
    CalendarEntry::new(MonthDay::new(9, 19), "scie circulaire", "scies circulaires", Female),
    CalendarEntry::new(MonthDay::new(9, 20), "détecteur de fumée", "détecteurs de fumée", Male),
    CalendarEntry::new(MonthDay::new(9, 21), "caméra de surveillance", "caméras de surveillance", Female),
    CalendarEntry::new(MonthDay::new(9, 22), "moustiquaire", "moustiquaires", Female),
    CalendarEntry::new(MonthDay::new(9, 23), "brise-vent", "brise-vent", Male),
    CalendarEntry::new(MonthDay::new(9, 24), "balcon", "balcons", Male),
    CalendarEntry::new(MonthDay::new(9, 25), "jardinière", "jardinières", Female),
    CalendarEntry::new(MonthDay::new(9, 26), "buisson", "buissons", Male),
    CalendarEntry::new(MonthDay::new(9, 27), "haie", "haies", Female),
    CalendarEntry::new(MonthDay::new(9, 28), "système d'irrigation", "systèmes d'irrigation", Male),
    CalendarEntry::new(MonthDay::new(9, 29), "thermomètre", "thermomètres", Male),
    CalendarEntry::new(MonthDay::new(9, 30), "hygromètre", "hygromètres", Male),
    CalendarEntry::new(MonthDay::new(10, 1), "luxmètre", "luxmètres", Male),
    CalendarEntry::new(MonthDay::new(10, 2), "anémomètre", "anémomètres", Male),
    CalendarEntry::new(MonthDay::new(10, 3), "pluviomètre", "pluviomètres", Male),
    CalendarEntry::new(MonthDay::new(10, 4), "baromètre", "baromètres", Male),
    CalendarEntry::new(MonthDay::new(10, 5), "chronomètre", "chronomètres", Male),
    CalendarEntry::new(MonthDay::new(10, 6), "microscope", "microscopes", Male),
    CalendarEntry::new(MonthDay::new(10, 7), "télescope", "télescopes", Male),
    CalendarEntry::new(MonthDay::new(10, 8), "spectroscope", "spectroscopes", Male),
    CalendarEntry::new(MonthDay::new(10, 9), "sac à bière", "sacs à bière", Male),
    CalendarEntry::new(MonthDay::new(10, 10), "ohmmètre", "ohmmètres", Male),
    CalendarEntry::new(MonthDay::new(10, 11), "ampermètre", "ampermètres", Male),
    CalendarEntry::new(MonthDay::new(10, 12), "voltmètre", "voltmètres", Male),
    CalendarEntry::new(MonthDay::new(10, 13), "oscilloscope", "oscilloscopes", Male),
    CalendarEntry::new(MonthDay::new(10, 14), "fréquencemètre", "fréquencemètres", Male),
    CalendarEntry::new(MonthDay::new(10, 15), "analyseur de spectre", "analyseurs de spectre", Male),
    CalendarEntry::new(MonthDay::new(10, 16), "circuit imprimé", "circuits imprimés", Male),
    CalendarEntry::new(MonthDay::new(10, 17), "disjoncteur", "disjoncteurs", Male),
    CalendarEntry::new(MonthDay::new(10, 18), "machine-à-faire-des-trous-dans-les-spaghetti", "machines-à-faire-des-trous-dans-les-spaghetti", Female),
    CalendarEntry::new(MonthDay::new(10, 19), "morceau de bois", "morceaux de bois", Male),
    CalendarEntry::new(MonthDay::new(10, 20), "pot de colle", "pots de colle", Male),
    CalendarEntry::new(MonthDay::new(10, 21), "paquet cadeau", "paquets cadeaux", Male),
    CalendarEntry::new(MonthDay::new(10, 22), "cacatoès", "cacatoès", Female),
    CalendarEntry::new(MonthDay::new(10, 23), "harmonica", "harmonicas", Male),
    CalendarEntry::new(MonthDay::new(10, 24), "bigoudi", "bigoudis", Male),
    CalendarEntry::new(MonthDay::new(10, 25), "dent de lait", "dents de lait", Female),
    CalendarEntry::new(MonthDay::new(10, 26), "bonhomme de neige", "bonhommes de neige", Male),
    CalendarEntry::new(MonthDay::new(10, 27), "marteau picoreur", "marteaux picoreurs", Male),
    CalendarEntry::new(MonthDay::new(10, 28), "bande magnétique", "bandes magnétiques", Female),
    CalendarEntry::new(MonthDay::new(10, 29), "punaise de lit", "punaises de lit", Female),
    CalendarEntry::new(MonthDay::new(10, 30), "carte de voeux", "cartes de voeux", Female),
    CalendarEntry::new(MonthDay::new(10, 31), "moins que rien", "moins que rien", Male),
    CalendarEntry::new(MonthDay::new(11, 1), "tour eiffel", "tours eiffel", Female),
    CalendarEntry::new(MonthDay::new(11, 2), "symptôme", "symptômes", Male),
    CalendarEntry::new(MonthDay::new(11, 3), "mamanite", "amanites", Female),
    CalendarEntry::new(MonthDay::new(11, 4), "cornichon", "cornichons", Male),
    CalendarEntry::new(MonthDay::new(11, 5), "zinzolin", "zinzolins", Male),
    CalendarEntry::new(MonthDay::new(11, 6), "jouet à bascule", "jouets à bascule", Male),
    CalendarEntry::new(MonthDay::new(11, 7), "bloc-notes", "blocs-notes", Male),
    CalendarEntry::new(MonthDay::new(11, 8), "routoir", "routoirs", Male),
    CalendarEntry::new(MonthDay::new(11, 9), "guenille", "guenilles", Female),
    CalendarEntry::new(MonthDay::new(11, 10), "lunette de soleil", "lunettes de soleil", Female),
    CalendarEntry::new(MonthDay::new(11, 11), "octavin", "octavins", Male),
    CalendarEntry::new(MonthDay::new(11, 12), "toque à trois cornes", "toques à trois cornes", Female),
    CalendarEntry::new(MonthDay::new(11, 13), "navire-hôpital", "navires-hôpitaux", Male),
    CalendarEntry::new(MonthDay::new(11, 14), "sesquiplan", "sesquiplans", Male),
    CalendarEntry::new(MonthDay::new(11, 15), "baldaquin", "baldaquins", Male),
    CalendarEntry::new(MonthDay::new(11, 16), "anémoscope", "anémoscopes", Male),
    CalendarEntry::new(MonthDay::new(11, 17), "clavicythérium", "clavicythériums", Male),
    CalendarEntry::new(MonthDay::new(11, 18), "certificat de conformité", "certificats de conformité", Male),
    CalendarEntry::new(MonthDay::new(11, 19), "bonnet de nuit", "bonnets de nuit", Male),
    CalendarEntry::new(MonthDay::new(11, 20), "atmomètre", "atmomètres", Male),
    CalendarEntry::new(MonthDay::new(11, 21), "pnéomètre", "pnéomètres", Male),
    CalendarEntry::new(MonthDay::new(11, 22), "marie-salope", "marie-salopes", Female),
    CalendarEntry::new(MonthDay::new(11, 23), "lettre de crédit", "lettres de crédit", Female),
    CalendarEntry::new(MonthDay::new(11, 24), "cithare", "cithares", Female),
    CalendarEntry::new(MonthDay::new(11, 25), "tramezzino", "tramezzinos", Male),
    CalendarEntry::new(MonthDay::new(11, 26), "ichcahuipilli", "ichcahuipillis", Female),
    CalendarEntry::new(MonthDay::new(11, 27), "journal intime", "journaux intimes", Male),
    CalendarEntry::new(MonthDay::new(11, 28), "harpe celtique", "harpes celtiques", Female),
    CalendarEntry::new(MonthDay::new(11, 29), "nœud d’agui", "nœuds d’agui", Male),
    CalendarEntry::new(MonthDay::new(11, 30), "cabotière", "cabotières", Female),
    CalendarEntry::new(MonthDay::new(12, 1), "pique-œuf", "pique-œufs", Male),
    CalendarEntry::new(MonthDay::new(12, 2), "revue de contrat", "revues de contrats", Female),
    CalendarEntry::new(MonthDay::new(12, 3), "grande surface", "grandes surfaces", Female),
    CalendarEntry::new(MonthDay::new(12, 4), "manteau de cheminée", "manteaux de cheminées", Male),
    CalendarEntry::new(MonthDay::new(12, 5), "charentaise", "charentaises", Female),
    CalendarEntry::new(MonthDay::new(12, 6), "chasse-goupille", "chasse-goupilles", Male),
    CalendarEntry::new(MonthDay::new(12, 7), "chaussure à orteils", "chaussures à orteils", Female),
    CalendarEntry::new(MonthDay::new(12, 8), "giroflée à cinq pétales", "giroflées a cinq pétales", Female),
    CalendarEntry::new(MonthDay::new(12, 9), "salade de phalanges", "salades de phalanges", Female),
    CalendarEntry::new(MonthDay::new(12, 10), "rogntudju", "rogntudju", Male),
    CalendarEntry::new(MonthDay::new(12, 11), "lixiviateuse", "lixiviateuses", Female),
    CalendarEntry::new(MonthDay::new(12, 12), "chaise berçante", "chaises berçantes", Female),
    CalendarEntry::new(MonthDay::new(12, 13), "chebec", "chebec", Male),
    CalendarEntry::new(MonthDay::new(12, 14), "boulevard circulaire", "boulevards circulaires", Male),
    CalendarEntry::new(MonthDay::new(12, 15), "bande cyclable", "bandes cyclables", Female),
    CalendarEntry::new(MonthDay::new(12, 16), "coupe-boulons", "coupe-boulons", Male),
    CalendarEntry::new(MonthDay::new(12, 17), "clé à pipe", "clés à pipes", Female),
    CalendarEntry::new(MonthDay::new(12, 18), "ensacheuse", "ensacheuses", Female),
    CalendarEntry::new(MonthDay::new(12, 19), "fulguromètre", "fulguromètre", Male),
    CalendarEntry::new(MonthDay::new(12, 20), "diptyque", "diptyques", Male),
    CalendarEntry::new(MonthDay::new(12, 21), "cucurbitacée", "cucurbitacées", Male),
    CalendarEntry::new(MonthDay::new(12, 22), "glassophone", "glassophones", Male),
    CalendarEntry::new(MonthDay::new(12, 23), "métaphore", "métaphores", Female),
    CalendarEntry::new(MonthDay::new(12, 24), "pentécontère", "pentécontères", Male),
    CalendarEntry::new(MonthDay::new(12, 25), "prépuce", "prépuces", Male),
    CalendarEntry::new(MonthDay::new(12, 26), "cumulus bourgeonnant", "cumulus bourgeonnants", Male),
    CalendarEntry::new(MonthDay::new(12, 27), "pyréolophore", "pyréolophores", Male),
    CalendarEntry::new(MonthDay::new(12, 28), "soubassophone", "soubassophones", Male),
    CalendarEntry::new(MonthDay::new(12, 29), "béret basque", "bérets basques", Male),
    CalendarEntry::new(MonthDay::new(12, 30), "vocifération sportive", "vociférations sportives", Male),
    CalendarEntry::new(MonthDay::new(12, 31), "armoire à glace", "armoires à glace", Female),
];
