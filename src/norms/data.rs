//! Embedded norms dataset: major Venezuelan laws and codes with their
//! Gaceta Oficial publication data. Entries are defined once at build time
//! and validated when the catalog is first accessed.

use super::{GacetaReference, GacetaType, NormEntry, NormStatus, NormType};

/// The seeded norm entries, in catalog order.
pub(super) fn known_norms() -> Vec<NormEntry> {
    vec![
        // --- Constitutional law ---
        NormEntry {
            key: "constitucion".into(),
            name: "Constitución de la República Bolivariana de Venezuela".into(),
            norm_type: NormType::Constitucion,
            status: NormStatus::Modificada,
            gaceta_number: "36.860".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "30-12-1999".into(),
            reforms: vec![GacetaReference {
                gaceta_number: "5.908".into(),
                gaceta_type: GacetaType::Extraordinaria,
                date: "19-02-2009".into(),
                description: "Enmienda No. 1 - Elimina límites a reelección".into(),
                action: "Enmienda".into(),
            }],
            notes: "Texto fundamental del ordenamiento jurídico venezolano. Establece el \
                    Estado Social de Derecho y Justicia."
                .into(),
            keywords: vec![
                "constitución".into(),
                "CRBV".into(),
                "derechos humanos".into(),
                "Estado Social".into(),
                "1999".into(),
            ],
        },
        // --- Codes ---
        NormEntry {
            key: "codigo_civil".into(),
            name: "Código Civil de Venezuela".into(),
            norm_type: NormType::Codigo,
            status: NormStatus::Vigente,
            gaceta_number: "2.990".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "26-07-1982".into(),
            reforms: vec![],
            notes: "Última reforma integral 1982. Regula personas, familia, bienes, \
                    obligaciones, contratos y sucesiones."
                .into(),
            keywords: vec![
                "código civil".into(),
                "contratos".into(),
                "obligaciones".into(),
                "familia".into(),
                "sucesiones".into(),
                "propiedad".into(),
            ],
        },
        NormEntry {
            key: "codigo_comercio".into(),
            name: "Código de Comercio".into(),
            norm_type: NormType::Codigo,
            status: NormStatus::Vigente,
            gaceta_number: "475".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "21-12-1955".into(),
            reforms: vec![],
            notes: "Reformas parciales posteriores en materias específicas. Regula actos \
                    de comercio y sociedades mercantiles."
                .into(),
            keywords: vec![
                "código de comercio".into(),
                "comerciante".into(),
                "sociedades mercantiles".into(),
                "títulos valores".into(),
            ],
        },
        NormEntry {
            key: "codigo_procedimiento_civil".into(),
            name: "Código de Procedimiento Civil".into(),
            norm_type: NormType::Codigo,
            status: NormStatus::Vigente,
            gaceta_number: "4.209".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "18-09-1990".into(),
            reforms: vec![],
            notes: "Rige los procedimientos civiles y mercantiles ante tribunales ordinarios.".into(),
            keywords: vec![
                "CPC".into(),
                "procedimiento civil".into(),
                "demanda".into(),
                "contestación".into(),
                "pruebas".into(),
                "sentencia".into(),
            ],
        },
        NormEntry {
            key: "codigo_organico_procesal_penal".into(),
            name: "Código Orgánico Procesal Penal".into(),
            norm_type: NormType::Codigo,
            status: NormStatus::Vigente,
            gaceta_number: "6.644".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "17-09-2021".into(),
            reforms: vec![GacetaReference {
                gaceta_number: "6.644".into(),
                gaceta_type: GacetaType::Extraordinaria,
                date: "17-09-2021".into(),
                description: "Reforma integral del COPP".into(),
                action: "Reforma".into(),
            }],
            notes: "Sistema acusatorio. Establece derechos del imputado, investigación, \
                    juicio oral y recursos."
                .into(),
            keywords: vec![
                "COPP".into(),
                "proceso penal".into(),
                "imputado".into(),
                "juicio oral".into(),
                "Ministerio Público".into(),
                "acusatorio".into(),
            ],
        },
        NormEntry {
            key: "codigo_penal".into(),
            name: "Código Penal".into(),
            norm_type: NormType::Codigo,
            status: NormStatus::Vigente,
            gaceta_number: "5.768".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "13-04-2005".into(),
            reforms: vec![GacetaReference {
                gaceta_number: "5.768".into(),
                gaceta_type: GacetaType::Extraordinaria,
                date: "13-04-2005".into(),
                description: "Reforma parcial".into(),
                action: "Reforma".into(),
            }],
            notes: "Tipifica delitos y establece penas. Modificaciones parciales en \
                    diversas materias."
                .into(),
            keywords: vec![
                "código penal".into(),
                "delitos".into(),
                "penas".into(),
                "homicidio".into(),
                "robo".into(),
                "corrupción".into(),
            ],
        },
        NormEntry {
            key: "codigo_organico_tributario".into(),
            name: "Código Orgánico Tributario".into(),
            norm_type: NormType::Codigo,
            status: NormStatus::Vigente,
            gaceta_number: "6.507".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "29-01-2020".into(),
            reforms: vec![GacetaReference {
                gaceta_number: "6.507".into(),
                gaceta_type: GacetaType::Extraordinaria,
                date: "29-01-2020".into(),
                description: "Reforma integral COT".into(),
                action: "Reforma".into(),
            }],
            notes: "Marco general del sistema tributario. Procedimientos, sanciones, recursos.".into(),
            keywords: vec![
                "COT".into(),
                "tributario".into(),
                "impuestos".into(),
                "SENIAT".into(),
                "procedimientos tributarios".into(),
                "sanciones".into(),
            ],
        },
        // --- Organic laws: administrative and judicial ---
        NormEntry {
            key: "lopa".into(),
            name: "Ley Orgánica de Procedimientos Administrativos".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "2.818".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "01-07-1981".into(),
            reforms: vec![],
            notes: "LOPA. Rige procedimientos ante la Administración Pública. Actos \
                    administrativos, recursos."
                .into(),
            keywords: vec![
                "LOPA".into(),
                "procedimiento administrativo".into(),
                "actos administrativos".into(),
                "recursos".into(),
                "silencio administrativo".into(),
            ],
        },
        NormEntry {
            key: "ley_amparo".into(),
            name: "Ley Orgánica de Amparo sobre Derechos y Garantías Constitucionales".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "34.060".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "27-09-1988".into(),
            reforms: vec![],
            notes: "Modificada jurisprudencialmente por TSJ. Procedimiento de amparo \
                    constitucional."
                .into(),
            keywords: vec![
                "amparo".into(),
                "derechos constitucionales".into(),
                "tutela judicial".into(),
                "procedimiento".into(),
            ],
        },
        NormEntry {
            key: "ley_tsj".into(),
            name: "Ley Orgánica del Tribunal Supremo de Justicia".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "39.522".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "01-10-2010".into(),
            reforms: vec![GacetaReference {
                gaceta_number: "39.522".into(),
                gaceta_type: GacetaType::Ordinaria,
                date: "01-10-2010".into(),
                description: "Reforma de la LOTSJ".into(),
                action: "Reforma".into(),
            }],
            notes: "Organización del TSJ. Salas, competencias, magistrados.".into(),
            keywords: vec![
                "TSJ".into(),
                "Tribunal Supremo".into(),
                "Salas".into(),
                "magistrados".into(),
                "competencias".into(),
            ],
        },
        NormEntry {
            key: "ley_jurisdiccion_contencioso_administrativa".into(),
            name: "Ley Orgánica de la Jurisdicción Contencioso Administrativa".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "39.451".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "22-06-2010".into(),
            reforms: vec![],
            notes: "Regula tribunales contencioso-administrativos. Competencia, \
                    procedimientos, medidas cautelares."
                .into(),
            keywords: vec![
                "contencioso administrativo".into(),
                "nulidad".into(),
                "demandas contra el Estado".into(),
                "SPA".into(),
            ],
        },
        // --- Organic laws: labor ---
        NormEntry {
            key: "lottt".into(),
            name: "Ley Orgánica del Trabajo, los Trabajadores y las Trabajadoras".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "6.076".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "07-05-2012".into(),
            reforms: vec![],
            notes: "LOTTT. Derechos laborales, jornada, salario, prestaciones, \
                    estabilidad, inamovilidad."
                .into(),
            keywords: vec![
                "LOTTT".into(),
                "trabajo".into(),
                "laboral".into(),
                "prestaciones".into(),
                "despido".into(),
                "salario".into(),
                "trabajadores".into(),
            ],
        },
        NormEntry {
            key: "lopcymat".into(),
            name: "Ley Orgánica de Prevención, Condiciones y Medio Ambiente de Trabajo".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "38.236".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "26-07-2005".into(),
            reforms: vec![],
            notes: "LOPCYMAT. Seguridad y salud ocupacional. INPSASEL. Accidentes de trabajo.".into(),
            keywords: vec![
                "LOPCYMAT".into(),
                "seguridad laboral".into(),
                "INPSASEL".into(),
                "accidentes".into(),
                "enfermedad ocupacional".into(),
            ],
        },
        // --- Organic laws: hydrocarbons and energy ---
        NormEntry {
            key: "ley_hidrocarburos".into(),
            name: "Ley Orgánica de Hidrocarburos".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "38.493".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "04-08-2006".into(),
            reforms: vec![],
            notes: "LOH. Regula actividades de hidrocarburos líquidos. Empresas mixtas, \
                    regalías, fiscalización."
                .into(),
            keywords: vec![
                "LOH".into(),
                "hidrocarburos".into(),
                "petróleo".into(),
                "PDVSA".into(),
                "empresas mixtas".into(),
                "regalías".into(),
            ],
        },
        NormEntry {
            key: "ley_hidrocarburos_gaseosos".into(),
            name: "Ley Orgánica de Hidrocarburos Gaseosos".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "36.793".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "23-09-1999".into(),
            reforms: vec![],
            notes: "Regula gas natural no asociado. Licencias, participación privada.".into(),
            keywords: vec![
                "gas natural".into(),
                "hidrocarburos gaseosos".into(),
                "licencias".into(),
                "GNL".into(),
            ],
        },
        NormEntry {
            key: "ley_ambiente".into(),
            name: "Ley Orgánica del Ambiente".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "5.833".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "22-12-2006".into(),
            reforms: vec![],
            notes: "Gestión del ambiente. Estudios de impacto ambiental. Sanciones.".into(),
            keywords: vec![
                "ambiente".into(),
                "impacto ambiental".into(),
                "conservación".into(),
                "contaminación".into(),
            ],
        },
        NormEntry {
            key: "ley_telecomunicaciones".into(),
            name: "Ley Orgánica de Telecomunicaciones".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "39.610".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "07-02-2011".into(),
            reforms: vec![],
            notes: "CONATEL. Concesiones, espectro radioeléctrico, servicios.".into(),
            keywords: vec![
                "telecomunicaciones".into(),
                "CONATEL".into(),
                "espectro".into(),
                "internet".into(),
                "telefonía".into(),
            ],
        },
        NormEntry {
            key: "ley_procesos_electorales".into(),
            name: "Ley Orgánica de Procesos Electorales".into(),
            norm_type: NormType::LeyOrganica,
            status: NormStatus::Vigente,
            gaceta_number: "5.928".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "12-08-2009".into(),
            reforms: vec![],
            notes: "CNE. Elecciones, votación, escrutinio, proclamación.".into(),
            keywords: vec![
                "elecciones".into(),
                "CNE".into(),
                "votación".into(),
                "candidatos".into(),
                "partidos".into(),
            ],
        },
        // --- Ordinary laws ---
        NormEntry {
            key: "ley_expropiacion".into(),
            name: "Ley de Expropiación por Causa de Utilidad Pública o Social".into(),
            norm_type: NormType::LeyOrdinaria,
            status: NormStatus::Vigente,
            gaceta_number: "37.475".into(),
            gaceta_type: GacetaType::Ordinaria,
            publication_date: "01-07-2002".into(),
            reforms: vec![],
            notes: "Procedimiento expropiatorio. Justiprecio, utilidad pública.".into(),
            keywords: vec![
                "expropiación".into(),
                "utilidad pública".into(),
                "justiprecio".into(),
                "indemnización".into(),
            ],
        },
        NormEntry {
            key: "ley_corrupcion".into(),
            name: "Ley Contra la Corrupción".into(),
            norm_type: NormType::LeyOrdinaria,
            status: NormStatus::Vigente,
            gaceta_number: "6.155".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "19-11-2014".into(),
            reforms: vec![],
            notes: "Delitos de corrupción. Funcionarios públicos. Enriquecimiento ilícito.".into(),
            keywords: vec![
                "corrupción".into(),
                "funcionarios".into(),
                "peculado".into(),
                "soborno".into(),
                "enriquecimiento".into(),
            ],
        },
        NormEntry {
            key: "ley_registro_notaria".into(),
            name: "Ley de Registros y del Notariado".into(),
            norm_type: NormType::LeyOrdinaria,
            status: NormStatus::Vigente,
            gaceta_number: "6.668".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "16-12-2021".into(),
            reforms: vec![],
            notes: "SAREN. Registro inmobiliario, mercantil. Notarías públicas.".into(),
            keywords: vec![
                "registro".into(),
                "notaría".into(),
                "SAREN".into(),
                "documentos públicos".into(),
                "protocolización".into(),
            ],
        },
        // --- Decree-laws ---
        NormEntry {
            key: "ley_bancos".into(),
            name: "Ley de Instituciones del Sector Bancario".into(),
            norm_type: NormType::DecretoLey,
            status: NormStatus::Vigente,
            gaceta_number: "6.154".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "19-11-2014".into(),
            reforms: vec![GacetaReference {
                gaceta_number: "6.154".into(),
                gaceta_type: GacetaType::Extraordinaria,
                date: "19-11-2014".into(),
                description: "Decreto-Ley reforma".into(),
                action: "Reforma".into(),
            }],
            notes: "Regula bancos e instituciones financieras. SUDEBAN. Operaciones bancarias.".into(),
            keywords: vec![
                "bancos".into(),
                "SUDEBAN".into(),
                "instituciones financieras".into(),
                "operaciones bancarias".into(),
            ],
        },
        NormEntry {
            key: "ley_islr".into(),
            name: "Ley de Impuesto Sobre la Renta".into(),
            norm_type: NormType::DecretoLey,
            status: NormStatus::Vigente,
            gaceta_number: "6.210".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "30-12-2015".into(),
            reforms: vec![],
            notes: "ISLR. Impuesto sobre la renta de personas naturales y jurídicas.".into(),
            keywords: vec![
                "ISLR".into(),
                "impuesto sobre la renta".into(),
                "declaración".into(),
                "retenciones".into(),
            ],
        },
        NormEntry {
            key: "ley_iva".into(),
            name: "Ley de Impuesto al Valor Agregado".into(),
            norm_type: NormType::DecretoLey,
            status: NormStatus::Vigente,
            gaceta_number: "6.507".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "29-01-2020".into(),
            reforms: vec![],
            notes: "IVA. Impuesto al consumo. Alícuota general y reducida.".into(),
            keywords: vec![
                "IVA".into(),
                "impuesto al valor agregado".into(),
                "facturación".into(),
                "crédito fiscal".into(),
            ],
        },
        NormEntry {
            key: "ley_arrendamiento_vivienda".into(),
            name: "Ley para la Regularización y Control de los Arrendamientos de Vivienda".into(),
            norm_type: NormType::DecretoLey,
            status: NormStatus::Vigente,
            gaceta_number: "6.053".into(),
            gaceta_type: GacetaType::Extraordinaria,
            publication_date: "12-11-2011".into(),
            reforms: vec![],
            notes: "Arrendamiento de viviendas. SUNAVI. Procedimientos especiales, desalojo.".into(),
            keywords: vec![
                "arrendamiento".into(),
                "vivienda".into(),
                "SUNAVI".into(),
                "desalojo".into(),
                "alquiler".into(),
            ],
        },
    ]
}
