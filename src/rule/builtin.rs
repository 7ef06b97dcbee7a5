//! 内置规则目录
//! 纯数据表：每个维度一张有序规则表，表序即优先级，修改顺序会改变分类结果
//! 规则正则保留前瞻/后顾与反向引用，由 fancy-regex 编译

use super::consts::{bnd, dev, eng, osn, vnd};
use super::model::{FieldDirective, RuleCatalog, UaField, UaRule};
use super::model::UaField::{Architecture, Model, Name, Type, Vendor, Version};
use super::transformer::{legacy_safari_version, lowercase, trim_value};

// ======== 规则构造辅助 ========

fn rule(description: &str, patterns: &[&str], directives: Vec<FieldDirective>) -> UaRule {
    UaRule::new(description, patterns, directives)
}

fn plain(field: UaField) -> FieldDirective {
    FieldDirective::Plain(field)
}

fn constant(field: UaField, value: &str) -> FieldDirective {
    FieldDirective::Constant(field, value.to_string())
}

fn transform(field: UaField, func: super::transformer::TransformFn) -> FieldDirective {
    FieldDirective::Transform(field, func)
}

fn replace(field: UaField, pattern: &str, with: &str) -> FieldDirective {
    FieldDirective::Replace(field, pattern.to_string(), with.to_string())
}

fn replace_then(
    field: UaField,
    pattern: &str,
    with: &str,
    func: super::transformer::TransformFn,
) -> FieldDirective {
    FieldDirective::ReplaceThenTransform(field, pattern.to_string(), with.to_string(), func)
}

/// 构建完整内置规则目录
pub fn builtin_catalog() -> RuleCatalog {
    RuleCatalog {
        browser: browser_rules(),
        cpu: cpu_rules(),
        device: device_rules(),
        engine: engine_rules(),
        os: os_rules(),
    }
}

// ======== 浏览器规则表 ========

fn browser_rules() -> Vec<UaRule> {
    vec![
        rule(
            "Chrome for Android/iOS",
            &[r"\b(?:crmo|crios)\/([\w\.]+)"],
            vec![plain(Version), constant(Name, bnd::CHROME)],
        ),
        rule(
            "Microsoft Edge",
            &[r"edg(?:e|ios|a)?\/([\w\.]+)"],
            vec![plain(Version), constant(Name, bnd::EDGE)],
        ),
        rule(
            "Opera, Presto based",
            &[
                r"(opera mini)\/([-\w\.]+)",                        // Opera Mini
                r"(opera [mobiletab]{3,6})\b.+version\/([-\w\.]+)", // Opera Mobi/Tablet
                r"(opera)(?:.+version\/|[\/ ]+)([\w\.]+)",          // Opera
            ],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Opera mini on iphone >= 8.0",
            &[r"opios[\/ ]+([\w\.]+)"],
            vec![plain(Version), constant(Name, "Opera Mini")],
        ),
        rule(
            "Opera Webkit",
            &[r"\bopr\/([\w\.]+)"],
            vec![plain(Version), constant(Name, bnd::OPERA)],
        ),
        rule(
            "Baidu",
            &[r"\bb[ai]*d(?:uhd|[ub]*[aekoprswx]{5,6})[\/ ]?([\w\.]+)"],
            vec![plain(Version), constant(Name, vnd::BAIDU)],
        ),
        rule(
            "Kindle",
            &[r"(kindle)\/([\w\.]+)"],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Lunascape/Maxthon/Netfront/Jasmine/Blazer",
            &[r"(lunascape|maxthon|netfront|jasmine|blazer)[\/ ]?([\w\.]*)"],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Avant/IEMobile/SlimBrowser", // Trident based
            &[r"(avant|iemobile|slim)\s?(?:browser)?[\/ ]?([\w\.]*)"],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Internet Explorer",
            &[r"(?:ms|\()(ie) ([\w\.]+)"],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Flock/RockMelt/Midori/Epiphany/Silk/Skyfire/Bolt/Iron/Iridium/PhantomJS/Bowser/QupZilla/Falkon", // Webkit/KHTML based
            &[r"(flock|rockmelt|midori|epiphany|silk|skyfire|bolt|iron|vivaldi|iridium|phantomjs|bowser|quark|qupzilla|falkon|rekonq|puffin|brave|whale(?!.+naver)|qqbrowserlite|qq|duckduckgo)\/([-\w\.]+)"],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Heytap/Ovi", // aka ShouQ
            &[r"(heytap|ovi)browser\/([\d\.]+)"],
            vec![replace(Name, "(.+)", "$1 Browser"), plain(Version)],
        ),
        rule(
            "Weibo",
            &[r"(weibo)__([\d\.]+)"],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "UCBrowser",
            &[r"(?:\buc? ?browser|(?:juc.+)ucweb)[\/ ]?([\w\.]+)"],
            vec![plain(Version), constant(Name, "UCBrowser")],
        ),
        rule(
            "WeChat",
            &[
                r"microm.+\bqbcore\/([\w\.]+)", // WeChat Desktop for Windows Built-in Browser
                r"\bqbcore\/([\w\.]+).+microm",
                r"micromessenger\/([\w\.]+)",   // WeChat
            ],
            vec![plain(Version), constant(Name, "WeChat")],
        ),
        rule(
            "Konqueror",
            &[r"konqueror\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Konqueror")],
        ),
        rule(
            "IE11",
            &[r"trident.+rv[: ]([\w\.]{1,9})\b.+like gecko"],
            vec![plain(Version), constant(Name, "IE")],
        ),
        rule(
            "Yandex",
            &[r"ya(?:search)?browser\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Yandex")],
        ),
        rule(
            "Smart Lenovo Browser",
            &[r"slbrowser\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Smart Lenovo Browser")],
        ),
        rule(
            "Avast/AVG Secure Browser",
            &[r"(avast|avg)\/([\w\.]+)"],
            vec![replace(Name, "(.+)", "$1 Secure Browser"), plain(Version)],
        ),
        rule(
            "Firefox Focus",
            &[r"\bfocus\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Firefox Focus")],
        ),
        rule(
            "Opera Touch",
            &[r"\bopt\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Opera Touch")],
        ),
        rule(
            "Coc Coc Browser",
            &[r"coc_coc\w+\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Coc Coc")],
        ),
        rule(
            "Dolphin",
            &[r"dolfin\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Dolphin")],
        ),
        rule(
            "Opera Coast",
            &[r"coast\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Opera Coast")],
        ),
        rule(
            "Xiaomi MIUI Browser",
            &[r"miuibrowser\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "MIUI Browser")],
        ),
        rule(
            "Firefox for iOS",
            &[r"fxios\/([-\w\.]+)"],
            vec![plain(Version), constant(Name, bnd::FIREFOX)],
        ),
        rule(
            "360",
            &[r"\bqihu|(qi?ho?o?|360)browser"],
            vec![constant(Name, "360 Browser")],
        ),
        rule(
            "Oculus/Sailfish/HuaweiBrowser/VivoBrowser",
            &[r"(oculus|sailfish|huawei|vivo)browser\/([\w\.]+)"],
            vec![replace(Name, "(.+)", "$1 Browser"), plain(Version)],
        ),
        rule(
            "Samsung Internet",
            &[r"samsungbrowser\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "Samsung Internet")],
        ),
        rule(
            "Comodo Dragon",
            &[r"(comodo_dragon)\/([\w\.]+)"],
            vec![replace(Name, "_", " "), plain(Version)],
        ),
        rule(
            "Sogou Explorer",
            &[r"metasr[\/ ]?([\d\.]+)"],
            vec![plain(Version), constant(Name, "Sogou Explorer")],
        ),
        rule(
            "Sogou Mobile",
            &[r"(sogou)mo\w+\/([\d\.]+)"],
            vec![constant(Name, "Sogou Mobile"), plain(Version)],
        ),
        rule(
            "Electron based",
            &[
                r"(electron)\/([\w\.]+) safari",                  // Electron-based App
                r"(tesla)(?: qtcarbrowser|\/(20\d\d\.[-\w\.]+))", // Tesla
                r"m?(qqbrowser|2345Explorer)[\/ ]?([\w\.]+)",     // QQBrowser/2345 Browser
            ],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "LieBao Browser",
            &[r"(lbbrowser)"],
            vec![plain(Name)],
        ),
        rule(
            "LinkedIn App for iOS & Android",
            &[r"\[(linkedin)app\]"],
            vec![plain(Name)],
        ),
        // WebView
        rule(
            "Facebook App for iOS & Android",
            &[r"((?:fban\/fbios|fb_iab\/fb4a)(?!.+fbav)|;fbav\/([\w\.]+);)"],
            vec![constant(Name, vnd::FACEBOOK), plain(Version)],
        ),
        rule(
            "WebView based",
            &[
                r"(Klarna)\/([\w\.]+)",                         // Klarna Shopping Browser for iOS & Android
                r"(kakao(?:talk|story))[\/ ]([\w\.]+)",         // Kakao App
                r"(naver)\(.*?(\d+\.[\w\.]+).*\)",              // Naver InApp
                r"safari (line)\/([\w\.]+)",                    // Line App for iOS
                r"\b(line)\/([\w\.]+)\/iab",                    // Line App for Android
                r"(alipay)client\/([\w\.]+)",                   // Alipay
                r"(chromium|instagram|snapchat)[\/ ]([-\w\.]+)", // Chromium/Instagram/Snapchat
            ],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Google Search Appliance on iOS",
            &[r"\bgsa\/([\w\.]+) .*safari\/"],
            vec![plain(Version), constant(Name, "GSA")],
        ),
        rule(
            "TikTok",
            &[r"musical_ly(?:.+app_?version\/|_)([\w\.]+)"],
            vec![plain(Version), constant(Name, "TikTok")],
        ),
        rule(
            "Chrome Headless",
            &[r"headlesschrome(?:\/([\w\.]+)| )"],
            vec![plain(Version), constant(Name, "Chrome Headless")],
        ),
        rule(
            "Chrome WebView",
            &[r" wv\).+(chrome)\/([\w\.]+)"],
            vec![constant(Name, "Chrome WebView"), plain(Version)],
        ),
        rule(
            "Android Browser",
            &[r"droid.+ version\/([\w\.]+)\b.+(?:mobile safari|safari)"],
            vec![plain(Version), constant(Name, "Android Browser")],
        ),
        rule(
            "Chrome/OmniWeb/Arora/Tizen/Nokia",
            &[r"(chrome|omniweb|arora|[tizenoka]{5} ?browser)\/v?([\w\.]+)"],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Mobile Safari",
            &[r"version\/([\w\.\,]+) .*mobile\/\w+ (safari)"],
            vec![plain(Version), constant(Name, "Mobile Safari")],
        ),
        rule(
            "Safari & Safari Mobile",
            &[r"version\/([\w(\.|\,)]+) .*(mobile ?safari|safari)"],
            vec![plain(Version), plain(Name)],
        ),
        rule(
            "Safari < 3.0",
            &[r"webkit.+?(mobile ?safari|safari)(\/[\w\.]+)"],
            vec![plain(Name), transform(Version, legacy_safari_version)],
        ),
        rule(
            "webkit|khtml",
            &[r"(webkit|khtml)\/([\w\.]+)"],
            vec![plain(Name), plain(Version)],
        ),
        // Gecko based
        rule(
            "Netscape",
            &[r"(navigator|netscape\d?)\/([-\w\.]+)"],
            vec![constant(Name, "Netscape"), plain(Version)],
        ),
        rule(
            "Firefox Reality",
            &[r"mobile vr; rv:([\w\.]+)\).+firefox"],
            vec![plain(Version), constant(Name, "Firefox Reality")],
        ),
        rule(
            "Firefox based",
            &[
                r"ekiohf.+(flow)\/([\w\.]+)", // Flow
                r"(swiftfox)",                // Swiftfox
                r"(icedragon|iceweasel|camino|chimera|fennec|maemo browser|minimo|conkeror|klar)[\/ ]?([\w\.\+]+)",
                // IceDragon/Iceweasel/Camino/Chimera/Fennec/Maemo/Minimo/Conkeror/Klar
                r"(seamonkey|k-meleon|icecat|iceape|firebird|phoenix|palemoon|basilisk|waterfox)\/([-\w\.]+)$",
                // Firefox/SeaMonkey/K-Meleon/IceCat/IceApe/Firebird/Phoenix
                r"(firefox)\/([\w\.]+)",                    // Other Firefox-based
                r"(mozilla)\/([\w\.]+) .+rv\:.+gecko\/\d+", // Mozilla
            ],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Other",
            &[
                r"(polaris|lynx|dillo|icab|doris|amaya|w3m|netsurf|sleipnir|obigo|mosaic|(?:go|ice|up)[\. ]?browser)[-\/ ]?v?([\w\.]+)",
                // Polaris/Lynx/Dillo/iCab/Doris/Amaya/w3m/NetSurf/Sleipnir/Obigo/Mosaic/Go/ICE/UP.Browser
                r"(links) \(([\w\.]+)", // Links
                r"panasonic;(viera)",   // Panasonic Viera
            ],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Cobalt",
            &[r"(cobalt)\/([\w\.]+)"],
            vec![plain(Name), plain(Version)],
        ),
    ]
}

// ======== CPU架构规则表 ========

fn cpu_rules() -> Vec<UaRule> {
    vec![
        rule(
            "AMD64 (x64)",
            &[r"(?:(amd|x(?:(?:86|64)[-_])?|wow|win)64)[;\)]"],
            vec![constant(Architecture, "amd64")],
        ),
        rule(
            "IA32 (quicktime)",
            &[r"(ia32(?=;))"],
            vec![transform(Architecture, lowercase)],
        ),
        rule(
            "IA32 (x86)",
            &[r"((?:i[346]|x)86)[;\)]"],
            vec![constant(Architecture, "ia32")],
        ),
        rule(
            "ARM64",
            &[r"\b(aarch64|arm(v?8e?l?|_?64))\b"],
            vec![constant(Architecture, "arm64")],
        ),
        rule(
            "ARMHF",
            &[r"\b(arm(?:v[67])?ht?n?[fl]p?)\b"],
            vec![constant(Architecture, "armhf")],
        ),
        rule(
            "PocketPC mistakenly identified as PowerPC",
            &[r"windows (ce|mobile); ppc;"],
            vec![constant(Architecture, "arm")],
        ),
        rule(
            "PowerPC",
            &[r"((?:ppc|powerpc)(?:64)?)(?: mac|;|\))"],
            vec![replace_then(Architecture, "ower", "", lowercase)],
        ),
        rule(
            "SPARC",
            &[r"(sun4\w)[;\)]"],
            vec![constant(Architecture, "sparc")],
        ),
        rule(
            "IA64, 68K, ARM/64, AVR/32, IRIX/64, MIPS/64, SPARC/64, PA-RISC",
            &[r"((?:avr32|ia64(?=;))|68k(?=\))|\barm(?=v(?:[1-7]|[5-7]1)l?|;|eabi)|(?=atmel )avr|(?:irix|mips|sparc)(?:64)?\b|pa-risc)"],
            vec![transform(Architecture, lowercase)],
        ),
    ]
}

// ======== 设备规则表 ========

fn device_rules() -> Vec<UaRule> {
    vec![
        // MOBILES & TABLETS
        rule(
            "Samsung Tablet",
            &[r"\b(sch-i[89]0\d|shw-m380s|sm-[ptx]\w{2,4}|gt-[pn]\d{2,4}|sgh-t8[56]9|nexus 10)"],
            vec![plain(Model), constant(Vendor, vnd::SAMSUNG), constant(Type, dev::TABLET)],
        ),
        rule(
            "Samsung Mobile",
            &[
                r"\b((?:s[cgp]h|gt|sm)-\w+|sc[g-]?[\d]+a?|galaxy nexus)",
                r"samsung[- ]([-\w]+)",
                r"sec-(sgh\w+)",
            ],
            vec![plain(Model), constant(Vendor, vnd::SAMSUNG), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Apple iPod/iPhone",
            &[r"(?:\/|\()(ip(?:hone|od)[\w, ]*)(?:\/|;)"],
            vec![plain(Model), constant(Vendor, vnd::APPLE), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Apple iPad",
            &[
                r"\((ipad);[-\w\),; ]+apple",
                r"applecoremedia\/[\w\.]+ \((ipad)",
                r"\b(ipad)\d\d?,\d\d?[;\]].+ios",
            ],
            vec![plain(Model), constant(Vendor, vnd::APPLE), constant(Type, dev::TABLET)],
        ),
        rule(
            "Apple Mac",
            &[r"(macintosh);"],
            vec![plain(Model), constant(Vendor, vnd::APPLE)],
        ),
        rule(
            "Sharp",
            &[r"\b(sh-?[altvz]?\d\d[a-ekm]?)"],
            vec![plain(Model), constant(Vendor, vnd::SHARP), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Huawei Tablet",
            &[r"\b((?:ag[rs][23]?|bah2?|sht?|btv)-a?[lw]\d{2})\b(?!.+d\/s)"],
            vec![plain(Model), constant(Vendor, vnd::HUAWEI), constant(Type, dev::TABLET)],
        ),
        rule(
            "Huawei Mobile",
            &[
                r"(?:huawei|honor)([-\w ]+)[;\)]",
                r"\b(nexus 6p|\w{2,4}e?-[atu]?[ln][\dx][012359c][adn]?)\b(?!.+d\/s)",
            ],
            vec![plain(Model), constant(Vendor, vnd::HUAWEI), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Xiaomi Mobile",
            &[
                r"\b(poco[\w ]+|m2\d{3}j\d\d[a-z]{2})(?: bui|\))",           // Xiaomi POCO
                r"\b; (\w+) build\/hm\1",                                    // Xiaomi Hongmi 'numeric' models
                r"\b(hm[-_ ]?note?[_ ]?(?:\d\w)?) bui",                      // Xiaomi Hongmi
                r"\b(redmi[\-_ ]?(?:note|k)?[\w_ ]+)(?: bui|\))",            // Xiaomi Redmi
                r"oid[^\)]+; (m?[12][0-389][01]\w{3,6}[c-y])( bui|; wv|\))", // Xiaomi Redmi 'numeric' models
                r"\b(mi[-_ ]?(?:a\d|one|one[_ ]plus|note lte|max|cc)?[_ ]?(?:\d?\w?)[_ ]?(?:plus|se|lite)?)(?: bui|\))", // Xiaomi Mi
            ],
            vec![replace(Model, "_", " "), constant(Vendor, vnd::XIAOMI), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Xiaomi Tablet",
            &[
                r"oid[^\)]+; (2\d{4}(283|rpbf)[cgl])( bui|\))", // Redmi Pad
                r"\b(mi[-_ ]?(?:pad)(?:[\w_ ]+))(?: bui|\))",   // Mi Pad tablets
            ],
            vec![replace(Model, "_", " "), constant(Vendor, vnd::XIAOMI), constant(Type, dev::TABLET)],
        ),
        rule(
            "OPPO",
            &[
                r"; (\w+) bui.+ oppo",
                r"\b(cph[12]\d{3}|p(?:af|c[al]|d\w|e[ar])[mt]\d0|x9007|a101op)\b",
            ],
            vec![plain(Model), constant(Vendor, vnd::OPPO), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Vivo",
            &[
                r"vivo (\w+)(?: bui|\))",
                r"\b(v[12]\d{3}\w?[at])(?: bui|;)",
            ],
            vec![plain(Model), constant(Vendor, vnd::VIVO), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Realme",
            &[r"\b(rmx[1-3]\d{3})(?: bui|;|\))"],
            vec![plain(Model), constant(Vendor, vnd::REALME), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Motorola Mobile",
            &[
                r"\b(milestone|droid(?:[2-4x]| (?:bionic|x2|pro|razr))?:?( 4g)?)\b[\w ]+build\/",
                r"\bmot(?:orola)?[- ](\w*)",
                r"((?:moto[\w\(\) ]+|xt\d{3,4}|nexus 6)(?= bui|\)))",
            ],
            vec![plain(Model), constant(Vendor, vnd::MOTOROLA), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Motorola Tablet",
            &[r"\b(mz60\d|xoom[2 ]{0,2}) build\/"],
            vec![plain(Model), constant(Vendor, vnd::MOTOROLA), constant(Type, dev::TABLET)],
        ),
        rule(
            "LG Tablet",
            &[r"([vl]k\-?\d{3}) bui| 3\.[-\w; ]{10}lg?-([06cv9]{3,4})"],
            vec![plain(Model), constant(Vendor, vnd::LG), constant(Type, dev::TABLET)],
        ),
        rule(
            "LG Mobile",
            &[
                r"(lm(?:-?f100[nv]?|-[\w\.]+)(?= bui|\))|nexus [45])",
                r"\blg[-e;\/ ]+((?!browser|netcast|android tv)\w+)",
                r"\blg-?([\d\w]+) bui",
            ],
            vec![plain(Model), constant(Vendor, vnd::LG), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Lenovo",
            &[
                r"(ideatab[-\w ]+)",
                r"lenovo ?(s[56]000[-\w]+|tab(?:[\w ]+)|yt[-\d\w]{6}|tb[-\d\w]{6})",
            ],
            vec![plain(Model), constant(Vendor, vnd::LENOVO), constant(Type, dev::TABLET)],
        ),
        rule(
            "Nokia",
            &[
                r"(?:maemo|nokia).*(n900|lumia \d+)",
                r"nokia[-_ ]?([-\w\.]*)",
            ],
            vec![replace(Model, "_", " "), constant(Vendor, vnd::NOKIA), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Google Pixel C",
            &[r"(pixel c)\b"],
            vec![plain(Model), constant(Vendor, vnd::GOOGLE), constant(Type, dev::TABLET)],
        ),
        rule(
            "Google Pixel",
            &[r"droid.+; (pixel[\daxl ]{0,6})(?: bui|\))"],
            vec![plain(Model), constant(Vendor, vnd::GOOGLE), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Sony Mobile",
            &[r"droid.+ (a?\d[0-2]{2}so|[c-g]\d{4}|so[-gl]\w+|xq-a\w[4-7][12])(?= bui|\).+chrome\/(?![1-6]{0,1}\d\.))"],
            vec![plain(Model), constant(Vendor, vnd::SONY), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Sony Tablet",
            &[
                r"sony tablet [ps]",
                r"\b(?:sony)?sgp\w+(?: bui|\))",
            ],
            vec![constant(Model, "Xperia Tablet"), constant(Vendor, vnd::SONY), constant(Type, dev::TABLET)],
        ),
        rule(
            "OnePlus",
            &[
                r" (kb2005|in20[12]5|be20[12][59])\b",
                r"(?:one)?(?:plus)? (a\d0\d\d)(?: b|\))",
            ],
            vec![plain(Model), constant(Vendor, vnd::ONEPLUS), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Amazon",
            &[
                r"(alexa)webm",
                r"(kf[a-z]{2}wi|aeo[c-r]{2})( bui|\))", // Kindle Fire without Silk / Echo Show
                r"(kf[a-z]+)( bui|\)).+silk\/",         // Kindle Fire HD
            ],
            vec![plain(Model), constant(Vendor, vnd::AMAZON), constant(Type, dev::TABLET)],
        ),
        rule(
            "Fire Phone",
            &[r"((?:sd|kf)[0349hijorstuw]+)( bui|\)).+silk\/"],
            vec![replace(Model, "(.+)", "Fire Phone $1"), constant(Vendor, vnd::AMAZON), constant(Type, dev::MOBILE)],
        ),
        rule(
            "BlackBerry PlayBook",
            &[r"(playbook);[-\w\),; ]+(rim)"],
            vec![plain(Model), plain(Vendor), constant(Type, dev::TABLET)],
        ),
        rule(
            "BlackBerry 10",
            &[
                r"\b((?:bb[a-f]|st[hv])100-\d)",
                r"\(bb10; (\w+)",
            ],
            vec![plain(Model), constant(Vendor, vnd::BLACKBERRY), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Asus Tablet",
            &[r"(?:\b|asus_)(transfo[prime ]{4,10} \w+|eeepc|slider \w+|nexus 7|padfone|p00[cj])"],
            vec![plain(Model), constant(Vendor, vnd::ASUS), constant(Type, dev::TABLET)],
        ),
        rule(
            "Asus Mobile",
            &[r" (z[bes]6[027][012][km][ls]|zenfone \d\w?)\b"],
            vec![plain(Model), constant(Vendor, vnd::ASUS), constant(Type, dev::MOBILE)],
        ),
        rule(
            "HTC Nexus 9",
            &[r"(nexus 9)"],
            vec![plain(Model), constant(Vendor, vnd::HTC), constant(Type, dev::TABLET)],
        ),
        rule(
            "HTC/ ZTE/ Alcatel/GeeksPhone/Nexian/Panasonic/Sony",
            &[
                r"(htc)[-;_ ]{1,2}([\w ]+(?=\)| bui)|\w+)", // HTC
                // ZTE
                r"(zte)[- ]([\w ]+?)(?: bui|\/|\))",
                r"(alcatel|geeksphone|nexian|panasonic(?!(?:;|\.))|sony(?!-bra))[-_ ]?([-\w]*)", // Alcatel/GeeksPhone/Nexian/Panasonic/Sony
            ],
            vec![plain(Vendor), replace(Model, "_", " "), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Acer",
            &[r"droid.+; ([ab][1-7]-?[0178a]\d\d?)"],
            vec![plain(Model), constant(Vendor, "Acer"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Meizu",
            &[
                r"droid.+; (m[1-5] note) bui",
                r"\bmz-([-\w]{2,})",
            ],
            vec![plain(Model), constant(Vendor, "Meizu"), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Ulefone",
            &[r"; ((?:power )?armor(?:[\w ]{0,8}))(?: bui|\))"],
            vec![plain(Model), constant(Vendor, "Ulefone"), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Mixed Mobile",
            &[
                r"(blackberry|benq|palm(?=\-)|sonyericsson|acer|asus|dell|meizu|motorola|polytron|infinix|tecno)[-_ ]?([-\w]*)",
                // BlackBerry/BenQ/Palm/Sony-Ericsson/Acer/Asus/Dell/Meizu/Motorola/Polytron
                r"(hp) ([\w ]+\w)",            // HP iPAQ
                r"(asus)-?(\w+)",              // Asus
                r"(microsoft); (lumia[\w ]+)", // Microsoft Lumia
                r"(lenovo)[-_ ]?([-\w]+)",     // Lenovo
                r"(jolla)",                    // Jolla
                r"(oppo) ?([\w ]+) bui",       // OPPO
            ],
            vec![plain(Vendor), plain(Model), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Mixed Tablet",
            &[
                r"(kobo)\s(ereader|touch)",              // Kobo
                r"(archos) (gamepad2?)",                 // Archos
                r"(hp).+(touchpad(?!.+tablet)|tablet)",  // HP TouchPad
                r"(kindle)\/([\w\.]+)",                  // Kindle
                r"(nook)[\w ]+build\/(\w+)",             // Nook
                r"(dell) (strea[kpr\d ]*[\dko])",        // Dell Streak
                r"(le[- ]+pan)[- ]+(\w{1,9}) bui",       // Le Pan Tablets
                r"(trinity)[- ]*(t\d{3}) bui",           // Trinity Tablets
                r"(gigaset)[- ]+(q\w{1,9}) bui",         // Gigaset Tablets
                r"(vodafone) ([\w ]+)(?:\)| bui)",       // Vodafone
            ],
            vec![plain(Vendor), plain(Model), constant(Type, dev::TABLET)],
        ),
        rule(
            "Surface Duo",
            &[r"(surface duo)"],
            vec![plain(Model), constant(Vendor, vnd::MICROSOFT), constant(Type, dev::TABLET)],
        ),
        rule(
            "Fairphone",
            &[r"droid [\d\.]+; (fp\du?)(?: b|\))"],
            vec![plain(Model), constant(Vendor, "Fairphone"), constant(Type, dev::MOBILE)],
        ),
        rule(
            "AT&T",
            &[r"(u304aa)"],
            vec![plain(Model), constant(Vendor, "AT&T"), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Siemens",
            &[r"\bsie-(\w*)"],
            vec![plain(Model), constant(Vendor, "Siemens"), constant(Type, dev::MOBILE)],
        ),
        rule(
            "RCA Tablets",
            &[r"\b(rct\w+) b"],
            vec![plain(Model), constant(Vendor, "RCA"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Dell Venue Tablets",
            &[r"\b(venue[\d ]{2,7}) b"],
            vec![plain(Model), constant(Vendor, "Dell"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Verizon Tablet",
            &[r"\b(q(?:mv|ta)\w+) b"],
            vec![plain(Model), constant(Vendor, "Verizon"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Barnes & Noble Tablet",
            &[r"\b(?:barnes[& ]+noble |bn[rt])([\w\+ ]*) b"],
            vec![plain(Model), constant(Vendor, "Barnes & Noble"), constant(Type, dev::TABLET)],
        ),
        rule(
            "NuVision",
            &[r"\b(tm\d{3}\w+) b"],
            vec![plain(Model), constant(Vendor, "NuVision"), constant(Type, dev::TABLET)],
        ),
        rule(
            "ZTE K Series Tablet",
            &[r"\b(k88) b"],
            vec![plain(Model), constant(Vendor, vnd::ZTE), constant(Type, dev::TABLET)],
        ),
        rule(
            "ZTE Nubia",
            &[r"\b(nx\d{3}j) b"],
            vec![plain(Model), constant(Vendor, vnd::ZTE), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Swiss GEN Mobile",
            &[r"\b(gen\d{3}) b.+49h"],
            vec![plain(Model), constant(Vendor, "Swiss"), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Swiss ZUR Tablet",
            &[r"\b(zur\d{3}) b"],
            vec![plain(Model), constant(Vendor, "Swiss"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Zeki Tablets",
            &[r"\b((zeki)?tb.*\b) b"],
            vec![plain(Model), constant(Vendor, "Zeki"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Dragon Touch Tablet",
            &[
                r"\b([yr]\d{2}) b",
                r"\b(dragon[- ]+touch |dt)(\w{5}) b",
            ],
            vec![constant(Vendor, "Dragon Touch"), plain(Model), constant(Type, dev::TABLET)],
        ),
        rule(
            "Insignia Tablets",
            &[r"\b(ns-?\w{0,9}) b"],
            vec![plain(Model), constant(Vendor, "Insignia"), constant(Type, dev::TABLET)],
        ),
        rule(
            "NextBook Tablets",
            &[r"\b((nxa|next)-?\w{0,9}) b"],
            vec![plain(Model), constant(Vendor, "NextBook"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Voice Xtreme Phones",
            &[r"\b(xtreme\_)?(v(1[045]|2[015]|[3469]0|7[05])) b"],
            vec![constant(Vendor, "Voice"), plain(Model), constant(Type, dev::MOBILE)],
        ),
        rule(
            "LvTel Phones",
            &[r"\b(lvtel\-)?(v1[12]) b"],
            vec![constant(Vendor, "LvTel"), plain(Model), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Essential PH-1",
            &[r"\b(ph-1) "],
            vec![plain(Model), constant(Vendor, "Essential"), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Envizen Tablets",
            &[r"\b(v(100md|700na|7011|917g).*\b) b"],
            vec![plain(Model), constant(Vendor, "Envizen"), constant(Type, dev::TABLET)],
        ),
        rule(
            "MachSpeed Tablets",
            &[r"\b(trio[-\w\. ]+) b"],
            vec![plain(Model), constant(Vendor, "MachSpeed"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Rotor Tablets",
            &[r"\btu_(1491) b"],
            vec![plain(Model), constant(Vendor, "Rotor"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Nvidia Shield Tablets",
            &[r"(shield[\w ]+) b"],
            vec![plain(Model), constant(Vendor, "Nvidia"), constant(Type, dev::TABLET)],
        ),
        rule(
            "Sprint Phones",
            &[r"(sprint) (\w+)"],
            vec![plain(Vendor), plain(Model), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Microsoft Kin",
            &[r"(kin\.[onetw]{3})"],
            vec![replace(Model, r"\.", " "), constant(Vendor, vnd::MICROSOFT), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Zebra Tablet",
            &[r"droid.+; (cc6666?|et5[16]|mc[239][23]x?|vc8[03]x?)\)"],
            vec![plain(Model), constant(Vendor, vnd::ZEBRA), constant(Type, dev::TABLET)],
        ),
        rule(
            "Zebra Mobile",
            &[r"droid.+; (ec30|ps20|tc[2-8]\d[kx])\)"],
            vec![plain(Model), constant(Vendor, vnd::ZEBRA), constant(Type, dev::MOBILE)],
        ),
        // SMARTTVS
        rule(
            "Samsung SmartTV",
            &[r"smart-tv.+(samsung)"],
            vec![plain(Vendor), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Samsung Maple SmartTV",
            &[r"hbbtv.+maple;(\d+)"],
            vec![replace(Model, "^", "SmartTV"), constant(Vendor, vnd::SAMSUNG), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "LG SmartTV",
            &[r"(nux; netcast.+smarttv|lg (netcast\.tv-201\d|android tv))"],
            vec![constant(Vendor, vnd::LG), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Apple TV",
            &[r"(apple) ?tv"],
            vec![plain(Vendor), constant(Model, "Apple TV"), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Google Chromecast",
            &[r"crkey"],
            vec![constant(Model, "Chromecast"), constant(Vendor, vnd::GOOGLE), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Fire TV",
            &[r"droid.+aft(\w+)( bui|\))"],
            vec![plain(Model), constant(Vendor, vnd::AMAZON), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Sharp SmartTV",
            &[
                r"\(dtv[\);].+(aquos)",
                r"(aquos-tv[\w ]+)\)",
            ],
            vec![plain(Model), constant(Vendor, vnd::SHARP), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Sony SmartTV",
            &[r"(bravia[\w ]+)( bui|\))"],
            vec![plain(Model), constant(Vendor, vnd::SONY), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Xiaomi SmartTV",
            &[r"(mitv-\w{5}) bui"],
            vec![plain(Model), constant(Vendor, vnd::XIAOMI), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "TechniSAT",
            &[r"Hbbtv.*(technisat) (.*);"],
            vec![plain(Vendor), plain(Model), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "Roku / HbbTV devices",
            &[
                r"\b(roku)[\dx]*[\)\/]((?:dvp-)?[\d\.]*)",
                r"hbbtv\/\d+\.\d+\.\d+ +\([\w\+ ]*; *([\w\d][^;]*);([^;]*)",
            ],
            vec![transform(Vendor, trim_value), transform(Model, trim_value), constant(Type, dev::SMARTTV)],
        ),
        rule(
            "SmartTV from Unidentified Vendors",
            &[r"\b(android tv|smart[- ]?tv|opera tv|tv; rv:)\b"],
            vec![constant(Type, dev::SMARTTV)],
        ),
        // CONSOLES
        rule(
            "Ouya / Nintendo",
            &[
                r"(ouya)",
                r"(nintendo) ([wids3utch]+)",
            ],
            vec![plain(Vendor), plain(Model), constant(Type, dev::CONSOLE)],
        ),
        rule(
            "Nvidia Shield Console",
            &[r"droid.+; (shield) bui"],
            vec![plain(Model), constant(Vendor, vnd::NVIDIA), constant(Type, dev::CONSOLE)],
        ),
        rule(
            "Playstation",
            &[r"(playstation [345portablevi]+)"],
            vec![plain(Model), constant(Vendor, vnd::SONY), constant(Type, dev::CONSOLE)],
        ),
        rule(
            "Microsoft Xbox",
            &[r"\b(xbox(?: one)?(?!; xbox))[\); ]"],
            vec![plain(Model), constant(Vendor, vnd::MICROSOFT), constant(Type, dev::CONSOLE)],
        ),
        // WEARABLES
        rule(
            "Pebble",
            &[r"((pebble))app"],
            vec![plain(Vendor), plain(Model), constant(Type, dev::WEARABLE)],
        ),
        rule(
            "Apple Watch",
            &[r"(watch)(?: ?os[,\/]|\d,\d\/)[\d\.]+"],
            vec![plain(Model), constant(Vendor, vnd::APPLE), constant(Type, dev::WEARABLE)],
        ),
        rule(
            "Google Glass",
            &[r"droid.+; (glass) \d"],
            vec![plain(Model), constant(Vendor, vnd::GOOGLE), constant(Type, dev::WEARABLE)],
        ),
        rule(
            "Zebra Wearable",
            &[r"droid.+; (wt63?0{2,3})\)"],
            vec![plain(Model), constant(Vendor, vnd::ZEBRA), constant(Type, dev::WEARABLE)],
        ),
        rule(
            "Oculus Quest",
            &[r"(quest( 2| pro)?)"],
            vec![plain(Model), constant(Vendor, vnd::FACEBOOK), constant(Type, dev::WEARABLE)],
        ),
        // EMBEDDED
        rule(
            "Tesla",
            &[r"(tesla)(?: qtcarbrowser|\/[-\w\.]+)"],
            vec![plain(Vendor), constant(Type, dev::EMBEDDED)],
        ),
        rule(
            "Echo Dot",
            &[r"(aeobc)\b"],
            vec![plain(Model), constant(Vendor, vnd::AMAZON), constant(Type, dev::EMBEDDED)],
        ),
        // MIXED (GENERIC)
        rule(
            "Android Phones from Unidentified Vendors",
            &[r"droid .+?; ([^;]+?)(?: bui|; wv\)|\) applew).+? mobile safari"],
            vec![plain(Model), constant(Type, dev::MOBILE)],
        ),
        rule(
            "Android Tablets from Unidentified Vendors",
            &[r"droid .+?; ([^;]+?)(?: bui|\) applew).+?(?! mobile) safari"],
            vec![plain(Model), constant(Type, dev::TABLET)],
        ),
        rule(
            "Unidentifiable Tablet",
            &[r"\b((tablet|tab)[;\/]|focus\/\d(?!.+mobile))"],
            vec![constant(Type, dev::TABLET)],
        ),
        rule(
            "Unidentifiable Mobile",
            &[r"(phone|mobile(?:[;\/]| [ \w\/\.]*safari)|pda(?=.+windows ce))"],
            vec![constant(Type, dev::MOBILE)],
        ),
        rule(
            "Generic Android Device",
            &[r"(android[-\w\. ]{0,9});.+buil"],
            vec![plain(Model), constant(Vendor, "Generic")],
        ),
    ]
}

// ======== 渲染引擎规则表 ========

fn engine_rules() -> Vec<UaRule> {
    vec![
        rule(
            "EdgeHTML",
            &[r"windows.+ edge\/([\w\.]+)"],
            vec![plain(Version), constant(Name, "EdgeHTML")],
        ),
        rule(
            "Blink",
            &[r"webkit\/537\.36.+chrome\/(?!27)([\w\.]+)"],
            vec![plain(Version), constant(Name, eng::BLINK)],
        ),
        rule(
            "Others",
            &[
                r"(presto)\/([\w\.]+)",                                               // Presto
                r"(webkit|trident|netfront|netsurf|amaya|lynx|w3m|goanna)\/([\w\.]+)", // WebKit/Trident/NetFront/NetSurf/Amaya/Lynx/w3m/Goanna
                r"ekioh(flow)\/([\w\.]+)",                                            // Flow
                r"(khtml|tasman|links)[\/ ]\(?([\w\.]+)",                             // KHTML/Tasman/Links
                r"(icab)[\/ ]([23]\.[\d\.]+)",                                        // iCab
                r"\b(libweb)",
            ],
            vec![plain(Name), plain(Version)],
        ),
        rule(
            "Gecko",
            &[r"rv\:([\w\.]{1,9})\b.+(gecko)"],
            vec![plain(Version), constant(Name, eng::GECKO)],
        ),
    ]
}

// ======== 操作系统规则表 ========

fn os_rules() -> Vec<UaRule> {
    vec![
        rule(
            "Windows (iTunes)",
            &[r"microsoft (windows) (vista|xp)"],
            vec![plain(Name)],
        ),
        rule(
            "Windows Phone",
            &[r"(windows (?:phone(?: os)?|mobile))[\/ ]?([\d\.\w ]*)"],
            vec![plain(Name)],
        ),
        rule(
            "Windows RT/XBox/Other",
            &[
                r"windows nt 6\.2; (arm)", // Windows RT
                r"windows[\/ ]?([ntce\d\. ]+\w)(?!.+xbox)",
                r"(?:win(?=3|9|n)|win 9x )([nt\d\.]+)",
            ],
            vec![constant(Name, osn::WINDOWS)],
        ),
        // iOS/macOS
        rule(
            "iOS",
            &[
                r"ip[honead]{2,4}\b(?:.*os ([\w]+) like mac|; opera)", // iOS
                r"(?:ios;fbsv\/|iphone.+ios[\/ ])([\d\.]+)",
                r"cfnetwork\/.+darwin",
            ],
            vec![constant(Name, "iOS")],
        ),
        rule(
            "Mac",
            &[
                r"(mac os x) ?([\w\. ]*)",
                r"(macintosh|mac_powerpc\b)(?!.+haiku)", // Mac OS
            ],
            vec![constant(Name, osn::MAC_OS)],
        ),
        // Mobile OSes
        rule(
            "Android-x86/HarmonyOS",
            &[r"droid [\w\.]+\b.+(android[- ]x86|harmonyos)"],
            vec![plain(Name)],
        ),
        rule(
            "Android/WebOS/QNX/Bada/RIM/Maemo/MeeGo/Sailfish OS",
            &[
                r"(android|webos|qnx|bada|rim tablet os|maemo|meego|sailfish)[-\/ ]?([\w\.]*)",
                r"(blackberry)\w*\/([\w\.]*)", // Blackberry
                r"(tizen|kaios)[\/ ]([\w\.]+)", // Tizen/KaiOS
                r"\((series40);",               // Series 40
            ],
            vec![plain(Name)],
        ),
        rule(
            "BlackBerry 10",
            &[r"\(bb(10);"],
            vec![constant(Name, vnd::BLACKBERRY)],
        ),
        rule(
            "Symbian",
            &[r"(?:symbian ?os|symbos|s60(?=;)|series60)[-\/ ]?([\w\.]*)"],
            vec![constant(Name, "Symbian")],
        ),
        rule(
            "Firefox OS",
            &[r"mozilla\/[\d\.]+ \((?:mobile|tablet|tv|mobile; [\w ]+); rv:.+ gecko\/([\w\.]+)"],
            vec![constant(Name, "Firefox OS")],
        ),
        rule(
            "WebOS",
            &[
                r"web0s;.+rt(tv)",
                r"\b(?:hp)?wos(?:browser)?\/([\w\.]+)", // WebOS
            ],
            vec![constant(Name, "webOS")],
        ),
        rule(
            "watchOS",
            &[r"watch(?: ?os[,\/]|\d,\d\/)([\d\.]+)"],
            vec![constant(Name, "watchOS")],
        ),
        // Google Chromecast
        rule(
            "Google Chromecast",
            &[r"crkey\/([\d\.]+)"],
            vec![constant(Name, "Chromecast")],
        ),
        rule(
            "Chromium OS",
            &[r"(cros) [\w]+(?:\)| ([\w\.]+)\b)"],
            vec![constant(Name, osn::CHROMIUM_OS)],
        ),
        // Smart TVs / Consoles / Other
        rule(
            "Smart TVs / Consoles / Linux / Other",
            &[
                // Smart TVs
                r"panasonic;(viera)", // Panasonic Viera
                r"(netrange)mmh",     // Netrange
                r"(nettv)\/(\d+\.[\w\.]+)", // NetTV
                // Console
                r"(nintendo|playstation) ([wids345portablevuch]+)", // Nintendo/Playstation
                r"(xbox); +xbox ([^\);]+)", // Microsoft Xbox (360, One, X, S, Series X, Series S)
                // Other
                r"\b(joli|palm)\b ?(?:os)?\/?([\w\.]*)", // Joli/Palm
                r"(mint)[\/\(\) ]?(\w*)",                // Mint
                r"(mageia|vectorlinux)[; ]",             // Mageia/VectorLinux
                r"([kxln]?ubuntu|debian|suse|opensuse|gentoo|arch(?= linux)|slackware|fedora|mandriva|centos|pclinuxos|red ?hat|zenwalk|linpus|raspbian|plan 9|minix|risc os|contiki|deepin|manjaro|elementary os|sabayon|linspire)(?: gnu\/linux)?(?: enterprise)?(?:[- ]linux)?(?:-gnu)?[-\/ ]?(?!chrom|package)([-\w\.]*)",
                // Ubuntu/Debian/SUSE/Gentoo/Arch/Slackware/Fedora/Mandriva/CentOS/PCLinuxOS/RedHat/Zenwalk/Linpus/Raspbian/Plan9/Minix/RISCOS/Contiki/Deepin/Manjaro/elementary/Sabayon/Linspire
                r"(hurd|linux) ?([\w\.]*)", // Hurd/Linux
                r"(gnu) ?([\w\.]*)",        // GNU
                r"\b([-frentopcghs]{0,5}bsd|dragonfly)[\/ ]?(?!amd|[ix346]{1,2}86)([\w\.]*)", // FreeBSD/NetBSD/OpenBSD/PC-BSD/GhostBSD/DragonFly
                r"(haiku) (\w+)", // Haiku
            ],
            vec![plain(Name)],
        ),
        rule(
            "Solaris",
            &[r"(sunos) ?([\w\.\d]*)"],
            vec![constant(Name, "Solaris")],
        ),
        rule(
            "Solaris / AIX / Unix / Other",
            &[
                r"((?:open)?solaris)[-\/ ]?([\w\.]*)", // Solaris
                r"(aix) ((\d)(?=\.|\)| )[\w\.])*",     // AIX
                r"\b(beos|os\/2|amigaos|morphos|openvms|fuchsia|hp-ux|serenityos)", // BeOS/OS2/AmigaOS/MorphOS/OpenVMS/Fuchsia/HP-UX/SerenityOS
                r"(unix) ?([\w\.]*)",                  // UNIX
            ],
            vec![plain(Name)],
        ),
    ]
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_all_categories() {
        // 测试场景：五个维度的内置规则表均非空
        let catalog = builtin_catalog();
        assert!(!catalog.browser.is_empty());
        assert!(!catalog.cpu.is_empty());
        assert!(!catalog.device.is_empty());
        assert!(!catalog.engine.is_empty());
        assert!(!catalog.os.is_empty());
    }

    #[test]
    fn test_builtin_rules_have_patterns_and_directives() {
        // 测试场景：每条规则至少一条正则且指令非空
        let catalog = builtin_catalog();
        for category in [
            &catalog.browser,
            &catalog.cpu,
            &catalog.device,
            &catalog.engine,
            &catalog.os,
        ] {
            for rule in category.iter() {
                assert!(!rule.patterns.is_empty(), "规则缺少正则：{}", rule.description);
                assert!(!rule.directives.is_empty(), "规则缺少指令：{}", rule.description);
            }
        }
    }
}
