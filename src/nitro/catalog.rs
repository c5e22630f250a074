//! Built-in object type table.
//!
//! Each row declares one NITRO `config/` resource. Logical names that would
//! clash with reserved words carry an `ns_` prefix and are renamed on the
//! wire (`ns_type` -> `type`).

use once_cell::sync::Lazy;

use crate::nitro::error::SchemaError;
use crate::nitro::schema::Operation::{Add, Get, Unset, Update};
use crate::nitro::schema::{ObjectSchema, SchemaRegistry};

static REGISTRY: Lazy<SchemaRegistry> = Lazy::new(build_registry);

/// The process-wide table of known object types.
pub fn registry() -> &'static SchemaRegistry {
    &REGISTRY
}

pub fn schema(type_name: &str) -> Result<&'static ObjectSchema, SchemaError> {
    registry().get(type_name)
}

fn build_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    for schema in ssl_schemas()
        .into_iter()
        .chain(responder_schemas())
        .chain(basic_schemas())
    {
        registry = registry.with(schema);
    }
    registry
}

fn ssl_schemas() -> Vec<ObjectSchema> {
    vec![
        ObjectSchema::builder("sslcertkey")
            .fields(&[
                "certkey",
                "cert",
                "key",
                "password",
                "fipskey",
                "hsmkey",
                "inform",
                "passplain",
                "expirymonitor",
                "notificationperiod",
                "bundle",
                "linkcertkeyname",
                "nodomaincheck",
                "ocspstaplingcache",
            ])
            .build(),
        ObjectSchema::builder("sslcipher")
            .fields(&["ciphergroupname", "ciphgrpalias", "ciphername", "cipherpriority", "sslprofile"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslcipher_sslciphersuite_binding")
            .fields(&["ciphergroupname", "ciphername", "cipherpriority", "description"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslcrl")
            .fields(&[
                "crlname",
                "crlpath",
                "inform",
                "refresh",
                "cacert",
                "method",
                "server",
                "url",
                "port",
                "basedn",
                "scope",
                "interval",
                "day",
                "time",
                "binddn",
                "password",
                "binary",
                "cacertfile",
                "cakeyfile",
                "indexfile",
                "revoke",
                "gencrl",
            ])
            .build(),
        ObjectSchema::builder("sslfipskey")
            .fields(&["fipskeyname", "keytype", "exponent", "modulus", "curve", "key", "inform", "wrapkeyname", "iv"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslocspresponder")
            .fields(&[
                "name",
                "url",
                "cache",
                "cachetimeout",
                "batchingdepth",
                "batchingdelay",
                "resptimeout",
                "respondercert",
                "trustresponder",
                "producedattimeskew",
                "signingcert",
                "usenonce",
                "insertclientcert",
            ])
            .build(),
        ObjectSchema::builder("sslparameter")
            .fields(&[
                "quantumsize",
                "crlmemorysizemb",
                "strictcachecks",
                "ssltriggertimeout",
                "sendclosenotify",
                "encrypttriggerpktcount",
                "denysslreneg",
                "insertionencoding",
                "ocspcachesize",
                "pushflag",
                "dropreqwithnohostheader",
                "pushenctriggertimeout",
                "undefactioncontrol",
                "undefactiondata",
                "defaultprofile",
            ])
            .ops(&[Update, Unset, Get])
            .build(),
        ObjectSchema::builder("sslpolicy")
            .fields(&["name", "rule", "reqaction", "action", "undefaction", "comment"])
            .build(),
        ObjectSchema::builder("sslpolicylabel")
            .fields(&["labelname"])
            .renamed("ns_type", "type")
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslprofile")
            .fields(&[
                "name",
                "sslprofiletype",
                "dhcount",
                "dh",
                "dhfile",
                "ersa",
                "ersacount",
                "sessreuse",
                "sesstimeout",
                "cipherredirect",
                "cipherurl",
                "clientauth",
                "clientcert",
                "dhkeyexpsizelimit",
                "sslredirect",
                "redirectportrewrite",
                "ssl3",
                "tls1",
                "tls11",
                "tls12",
                "snienable",
                "ocspstapling",
                "serverauth",
                "commonname",
                "pushenctrigger",
                "sendclosenotify",
                "cleartextport",
                "insertionencoding",
                "denysslreneg",
                "quantumsize",
                "strictcachecks",
                "encrypttriggerpktcount",
                "pushflag",
                "dropreqwithnohostheader",
                "pushenctriggertimeout",
                "ssltriggertimeout",
                "clientauthuseboundcachain",
                "sessionticket",
                "sessionticketlifetime",
                "hsts",
                "maxage",
                "includesubdomains",
                "ciphername",
                "cipherpriority",
                "strictsigdigestcheck",
            ])
            .build(),
        ObjectSchema::builder("sslprofile_sslcipher_binding")
            .fields(&["name", "ciphername", "cipherpriority", "description"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslservice")
            .fields(&[
                "servicename",
                "dh",
                "dhfile",
                "dhcount",
                "dhkeyexpsizelimit",
                "ersa",
                "ersacount",
                "sessreuse",
                "sesstimeout",
                "cipherredirect",
                "cipherurl",
                "sslv2redirect",
                "sslv2url",
                "clientauth",
                "clientcert",
                "sslredirect",
                "redirectportrewrite",
                "ssl2",
                "ssl3",
                "tls1",
                "tls11",
                "tls12",
                "snienable",
                "ocspstapling",
                "serverauth",
                "commonname",
                "pushenctrigger",
                "sendclosenotify",
                "dtlsprofilename",
                "sslprofile",
                "strictsigdigestcheck",
            ])
            .ops(&[Update, Unset, Get])
            .build(),
        ObjectSchema::builder("sslvserver")
            .fields(&[
                "vservername",
                "cleartextport",
                "dh",
                "dhfile",
                "dhcount",
                "dhkeyexpsizelimit",
                "ersa",
                "ersacount",
                "sessreuse",
                "sesstimeout",
                "cipherredirect",
                "cipherurl",
                "sslv2redirect",
                "sslv2url",
                "clientauth",
                "clientcert",
                "sslredirect",
                "redirectportrewrite",
                "ssl2",
                "ssl3",
                "tls1",
                "tls11",
                "tls12",
                "snienable",
                "ocspstapling",
                "pushenctrigger",
                "sendclosenotify",
                "dtlsprofilename",
                "sslprofile",
                "hsts",
                "maxage",
                "includesubdomains",
                "strictsigdigestcheck",
            ])
            .ops(&[Update, Unset, Get])
            .build(),
        ObjectSchema::builder("sslvserver_sslcertkey_binding")
            .fields(&["vservername", "certkeyname", "ca", "crlcheck", "skipcaname", "snicert", "ocspcheck"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslvserver_sslpolicy_binding")
            .fields(&[
                "vservername",
                "policyname",
                "priority",
                "gotopriorityexpression",
                "invoke",
                "labeltype",
                "labelname",
            ])
            .renamed("ns_type", "type")
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslvserver_sslcipher_binding")
            .fields(&["vservername", "ciphername", "description"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("sslglobal_sslpolicy_binding")
            .fields(&[
                "policyname",
                "priority",
                "gotopriorityexpression",
                "invoke",
                "labeltype",
                "labelname",
            ])
            .renamed("ns_type", "type")
            .ops(&[Add, Get])
            .build(),
    ]
}

fn responder_schemas() -> Vec<ObjectSchema> {
    vec![
        ObjectSchema::builder("responderaction")
            .fields(&["name"])
            .renamed("ns_type", "type")
            .fields(&[
                "target",
                "htmlpage",
                "bypasssafetycheck",
                "comment",
                "responsestatuscode",
                "reasonphrase",
                "newname",
            ])
            .build(),
        ObjectSchema::builder("responderglobal_binding")
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderglobal_responderpolicy_binding")
            .fields(&[
                "priority",
                "globalbindtype",
                "policyname",
                "labelname",
                "gotopriorityexpression",
                "invoke",
            ])
            .renamed("ns_type", "type")
            .fields(&["labeltype"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("responderhtmlpage")
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderparam")
            .fields(&["undefaction"])
            .ops(&[Update, Unset, Get])
            .build(),
        ObjectSchema::builder("responderpolicy")
            .fields(&[
                "name",
                "rule",
                "action",
                "undefaction",
                "comment",
                "logaction",
                "appflowaction",
                "newname",
            ])
            .build(),
        ObjectSchema::builder("responderpolicy_binding")
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicy_crvserver_binding")
            .fields(&["boundto", "name"])
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicy_csvserver_binding")
            .fields(&["boundto", "name"])
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicy_lbvserver_binding")
            .fields(&["boundto", "name"])
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicy_responderglobal_binding")
            .fields(&["boundto", "name"])
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicy_responderpolicylabel_binding")
            .fields(&["boundto", "name"])
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicylabel")
            .fields(&["labelname", "policylabeltype", "comment", "newname"])
            .ops(&[Add, Get])
            .build(),
        ObjectSchema::builder("responderpolicylabel_binding")
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicylabel_policybinding_binding")
            .fields(&[
                "priority",
                "policyname",
                "labelname",
                "invoke_labelname",
                "gotopriorityexpression",
                "invoke",
                "labeltype",
            ])
            .ops(&[Get])
            .build(),
        ObjectSchema::builder("responderpolicylabel_responderpolicy_binding")
            .fields(&[
                "priority",
                "policyname",
                "labelname",
                "invoke_labelname",
                "gotopriorityexpression",
                "invoke",
                "labeltype",
            ])
            .ops(&[Add, Get])
            .build(),
    ]
}

fn basic_schemas() -> Vec<ObjectSchema> {
    // The appliance spells this one field with a capital letter.
    vec![
        ObjectSchema::builder("server")
            .fields(&[
                "name",
                "ipaddress",
                "domain",
                "translationip",
                "translationmask",
                "domainresolveretry",
                "state",
                "ipv6address",
                "comment",
                "td",
                "domainresolvenow",
                "delay",
                "graceful",
            ])
            .renamed("internal", "Internal")
            .fields(&["newname"])
            .action_key("name")
            .build(),
        ObjectSchema::builder("service")
            .fields(&[
                "name",
                "ip",
                "servername",
                "servicetype",
                "port",
                "cleartextport",
                "cachetype",
                "maxclient",
                "healthmonitor",
                "maxreq",
                "cacheable",
                "cip",
                "cipheader",
                "usip",
                "pathmonitor",
                "pathmonitorindv",
                "useproxyport",
                "sc",
                "sp",
                "rtspsessionidremap",
                "clttimeout",
                "svrtimeout",
                "customserverid",
                "serverid",
                "cka",
                "tcpb",
                "cmp",
                "maxbandwidth",
                "accessdown",
                "monthreshold",
                "state",
                "downstateflush",
                "tcpprofilename",
                "httpprofilename",
                "hashid",
                "comment",
                "appflowlog",
                "netprofile",
                "td",
                "processlocal",
                "dnsprofilename",
                "monconnectionclose",
                "ipaddress",
                "weight",
                "monitor_name_svc",
                "riseapbrstatsmsgcode",
                "delay",
                "graceful",
            ])
            .renamed("internal", "Internal")
            .fields(&["newname"])
            .action_key("name")
            .build(),
    ]
}
